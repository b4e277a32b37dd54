use anyhow::Context;
use password_change_form::{
    configuration::get_configuration, domain::Field, form::PasswordChangeForm, telemetry,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads the current password, the new password and its confirmation as three
/// lines on stdin, then submits them once.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Invalid configuration.")?;
    let guard = telemetry::init(&configuration.logger);

    let client = configuration
        .client
        .client()
        .context("Failed to build the password update client.")?;
    let form = PasswordChangeForm::new(client);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    for field in Field::ALL {
        let value = lines
            .next_line()
            .await
            .with_context(|| format!("Failed to read {}", field.label()))?
            .unwrap_or_default();
        form.set_field(field, value);
    }

    let outcome = form.submit().await;
    if let Some(alert) = form.view().alert {
        println!("{}", alert);
    }
    let succeeded = matches!(outcome, Some(Ok(_)));
    // flush the log file before a non-zero exit skips destructors
    drop(guard);
    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
