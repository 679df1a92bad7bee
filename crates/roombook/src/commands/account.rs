//! Login and sign-up handlers.

use roombook_core::{LoginOutcome, RegistrationForm, RegistrationOutcome, Reservations};
use secrecy::SecretString;

use crate::cli::{GlobalOpts, LoginArgs, SignupArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn login(app: &Reservations, args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let password = match args.password {
        Some(p) => SecretString::from(p),
        None => util::prompt_secret("Password: ")?,
    };

    match app.login(&args.email, &password).await {
        LoginOutcome::LoggedIn(user) => {
            output::print_status(
                &format!("Logged in as {} (user {})", user.full_name(), user.id),
                &global.color,
                global.quiet,
            );
            let out = output::render_single(&global.output, &user, util::user_detail, |u| {
                u.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
        LoginOutcome::InvalidCredentials(message) => Err(CliError::AuthFailed { message }),
        LoginOutcome::TransportFailure(reason) => Err(CliError::ConnectionFailed {
            url: util::server_url(app),
            reason,
        }),
    }
}

pub async fn signup(app: &Reservations, args: SignupArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (password, confirm_password) = util::passwords(args.password, args.confirm_password)?;

    let form = RegistrationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password,
        confirm_password,
    };

    match app.register(&form).await? {
        RegistrationOutcome::Registered(user) => {
            output::print_status(
                &format!("Account created for {} (user {})", user.email, user.id),
                &global.color,
                global.quiet,
            );
            let out = output::render_single(&global.output, &user, util::user_detail, |u| {
                u.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
        RegistrationOutcome::EmailInUse(message) => Err(CliError::Conflict { message }),
        RegistrationOutcome::Rejected { status, message } => Err(CliError::Rejected { status, message }),
        RegistrationOutcome::TransportFailure(reason) => Err(CliError::ConnectionFailed {
            url: util::server_url(app),
            reason,
        }),
    }
}
