//! systemd unit rendering using Minijinja.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

const SERVICE_UNIT_TEMPLATE: &str = include_str!("../assets/dgraph.service.j2");
const SERVICE_DESCRIPTION: &str = "Dgraph graph database";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the Dgraph service unit around `exec_start`.
pub fn render_service_unit(exec_start: &str) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    });

    Ok(env.render_str(
        SERVICE_UNIT_TEMPLATE,
        context! { description => SERVICE_DESCRIPTION, exec_start => exec_start },
    )?)
}
