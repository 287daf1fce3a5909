//! Interactive app - Login, Signup and Home screens in the terminal
//!
//! The navigator decides which screen is shown. Each visit builds a fresh
//! controller and unmounts it on leave.

use std::sync::Arc;

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use tokio::runtime::Runtime;

use shutter_core::adapters::navigation::StackNavigator;
use shutter_core::ports::{AlertPresenter, Navigator};
use shutter_core::services::{PickOutcome, ScreenLifetime, SubmitOutcome};
use shutter_core::{Screen, ShutterContext};

use super::{get_context, runtime};
use crate::output;
use crate::terminal::{Activity, TerminalAlerts, TerminalImageSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Unmounts the screen when the visit ends, even on error
struct Mounted(ScreenLifetime);

impl Drop for Mounted {
    fn drop(&mut self) {
        self.0.unmount();
    }
}

struct App {
    ctx: ShutterContext,
    rt: Runtime,
    navigator: Arc<StackNavigator>,
    alerts: Arc<dyn AlertPresenter>,
    activity: Activity,
}

pub fn run(base_url: Option<&str>) -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        bail!("The interactive app needs a terminal. Use `shutter login` or `shutter signup` instead.");
    }

    let ctx = get_context(base_url)?;
    if let Some(logger) = &ctx.logger {
        let _ = logger.log_event("app_started");
    }
    let activity = Activity::default();
    let app = App {
        navigator: ctx.navigator(),
        alerts: Arc::new(TerminalAlerts::interactive(activity.clone())),
        rt: runtime()?,
        activity,
        ctx,
    };

    output::info(&format!("Shutter - {}", app.ctx.config.base_url));

    loop {
        let flow = match app.navigator.current() {
            Screen::Login => app.login_screen()?,
            Screen::Signup => app.signup_screen()?,
            Screen::Home => app.home_screen()?,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

impl App {
    fn submit(&self, message: &str, fut: impl std::future::Future<Output = SubmitOutcome>) -> SubmitOutcome {
        self.activity.start(message);
        let outcome = self.rt.block_on(fut);
        self.activity.stop();
        outcome
    }

    fn login_screen(&self) -> Result<Flow> {
        output::header("Login");
        let controller = self
            .ctx
            .login_controller(self.navigator.clone(), self.alerts.clone());
        let _mounted = Mounted(controller.lifetime());

        loop {
            let choice = Select::new()
                .items(&["Log in", "Create account? Sign up", "Quit"])
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    let email: String = Input::new()
                        .with_prompt("Email")
                        .with_initial_text(controller.email())
                        .allow_empty(true)
                        .interact_text()?;
                    let password = Password::new()
                        .with_prompt("Password")
                        .allow_empty_password(true)
                        .interact()?;
                    controller.set_email(email);
                    controller.set_password(password);

                    if let SubmitOutcome::Navigated(_) = self.submit("Logging in...", controller.submit()) {
                        return Ok(Flow::Continue);
                    }
                }
                1 => {
                    controller.open_signup();
                    return Ok(Flow::Continue);
                }
                _ => return Ok(Flow::Quit),
            }
        }
    }

    fn signup_screen(&self) -> Result<Flow> {
        output::header("Sign Up");
        let controller = self
            .ctx
            .signup_controller(self.navigator.clone(), self.alerts.clone());
        let _mounted = Mounted(controller.lifetime());

        loop {
            let choice = Select::new()
                .items(&["Sign up", "Already have an account? Login", "Quit"])
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    let name: String = Input::new()
                        .with_prompt("Name")
                        .with_initial_text(controller.name())
                        .allow_empty(true)
                        .interact_text()?;
                    let email: String = Input::new()
                        .with_prompt("Email")
                        .with_initial_text(controller.email())
                        .allow_empty(true)
                        .interact_text()?;
                    let password = Password::new()
                        .with_prompt("Password")
                        .allow_empty_password(true)
                        .interact()?;
                    let confirm_password = Password::new()
                        .with_prompt("Confirm password")
                        .allow_empty_password(true)
                        .interact()?;
                    controller.set_name(name);
                    controller.set_email(email);
                    controller.set_password(password);
                    controller.set_confirm_password(confirm_password);

                    if let SubmitOutcome::Navigated(_) = self.submit("Creating account...", controller.submit()) {
                        return Ok(Flow::Continue);
                    }
                }
                1 => {
                    controller.open_login();
                    return Ok(Flow::Continue);
                }
                _ => return Ok(Flow::Quit),
            }
        }
    }

    fn home_screen(&self) -> Result<Flow> {
        output::header("Home");
        let home = self
            .ctx
            .home_controller(Arc::new(TerminalImageSource), self.alerts.clone());
        let _mounted = Mounted(home.lifetime());

        loop {
            let state = home.state();
            match &state.image_uri {
                Some(uri) => println!("Image: {}", uri.as_str().cyan()),
                None => println!("{}", "No image selected".dimmed()),
            }

            if state.modal_visible {
                let choice = Select::new()
                    .with_prompt("Select image")
                    .items(&["Open Camera", "Select from Gallery", "Cancel"])
                    .default(1)
                    .interact()?;

                let outcome = match choice {
                    0 => self.rt.block_on(home.open_camera()),
                    1 => self.rt.block_on(home.select_from_gallery()),
                    _ => {
                        home.close_modal();
                        continue;
                    }
                };
                match outcome {
                    PickOutcome::Cancelled => output::info("No image selected."),
                    PickOutcome::Failed(msg) => output::warning(&msg),
                    PickOutcome::Selected(_) | PickOutcome::PermissionDenied | PickOutcome::Discarded => {}
                }
                continue;
            }

            let mut items = vec!["Select image"];
            if state.image_uri.is_some() {
                items.push("Remove image");
            }
            items.push("Back to login");
            items.push("Quit");

            let choice = Select::new().items(&items).default(0).interact()?;
            match items[choice] {
                "Select image" => home.open_modal(),
                "Remove image" => home.remove_image(),
                "Back to login" => {
                    if !self.navigator.go_back() {
                        self.navigator.navigate_to(Screen::Login);
                    }
                    return Ok(Flow::Continue);
                }
                _ => return Ok(Flow::Quit),
            }
        }
    }
}
