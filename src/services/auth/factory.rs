/// Factory: build the process-wide `PolicyEnforcer` from application `Config`.
use crate::config::Config;
use crate::services::auth::PolicyEnforcer;

pub fn build_enforcer(config: &Config) -> PolicyEnforcer {
    PolicyEnforcer::new(config.dataporten_password.clone())
}
