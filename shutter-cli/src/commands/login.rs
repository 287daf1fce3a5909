//! Login command - sign in once without the interactive app

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;

use super::{get_context, report_outcome, runtime, secret_field, text_field};
use crate::terminal::{Activity, TerminalAlerts};

pub fn run(base_url: Option<&str>, email: Option<String>, json: bool) -> Result<ExitCode> {
    let ctx = get_context(base_url)?;
    if let Some(logger) = &ctx.logger {
        let _ = logger.log_command("login");
    }

    let email = text_field("Email", email)?;
    let password = secret_field("Password")?;

    let activity = Activity::default();
    let alerts = Arc::new(TerminalAlerts::one_shot(activity.clone(), json));
    let controller = ctx.login_controller(ctx.navigator(), alerts);
    controller.set_email(email);
    controller.set_password(password);

    if !json {
        activity.start("Logging in...");
    }
    let outcome = runtime()?.block_on(controller.submit());
    activity.stop();

    report_outcome(&outcome, json)
}
