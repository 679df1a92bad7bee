//! User account command handlers.

use roombook_core::{CoreError, RegistrationForm, Reservations, UserId};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn user_not_found(id: UserId) -> CliError {
    CliError::NotFound {
        resource_type: "user".into(),
        identifier: id.to_string(),
        list_command: "login --email <EMAIL>".into(),
    }
}

fn map_lookup(id: UserId) -> impl FnOnce(CoreError) -> CliError {
    move |err| match err {
        CoreError::NotFound { .. } => user_not_found(id),
        other => other.into(),
    }
}

pub async fn handle(app: &Reservations, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        UsersCommand::Show { id } => {
            let user = app.get_user(id).await.map_err(map_lookup(id))?;
            let out = output::render_single(&global.output, &user, util::user_detail, |u| {
                u.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Update(args) => {
            let current = app.get_user(args.id).await.map_err(map_lookup(args.id))?;
            let (password, confirm_password) =
                util::passwords(args.password, args.confirm_password)?;
            let form = RegistrationForm {
                first_name: args.first_name.unwrap_or(current.first_name),
                last_name: args.last_name.unwrap_or(current.last_name),
                email: args.email.unwrap_or(current.email),
                password,
                confirm_password,
            };
            let user = app
                .update_account(args.id, &form)
                .await
                .map_err(map_lookup(args.id))?;
            output::print_status(&format!("User {} updated", user.id), &global.color, global.quiet);
            let out = output::render_single(&global.output, &user, util::user_detail, |u| {
                u.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete user {id} and their account? This cannot be undone."),
                "users delete",
                global.yes,
            )? {
                return Ok(());
            }
            app.delete_user(id).await.map_err(map_lookup(id))?;
            output::print_status(&format!("User {id} deleted"), &global.color, global.quiet);
            Ok(())
        }
    }
}
