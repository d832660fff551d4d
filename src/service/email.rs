//! Outbound email over SMTP.

use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// SMTP mailer shared through [`crate::state::AppState`].
///
/// The transport pools connections internally, so clones are cheap and all
/// share the same pool.
#[derive(Clone)]
pub struct EmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let from = config
            .smtp_from
            .parse::<Mailbox>()
            .map_err(|_| ConfigError::InvalidEnvVar("SMTP_FROM".to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    /// Sends a plain text message from a background task.
    ///
    /// Request handling never waits on SMTP. Delivery failures are logged
    /// and otherwise dropped; OTP flows stay usable because the code can be
    /// requested again.
    pub fn send_detached(&self, to: String, subject: String, body: String) {
        let transport = self.transport.clone();
        let from = self.from.clone();

        tokio::spawn(async move {
            let recipient = match to.parse::<Mailbox>() {
                Ok(recipient) => recipient,
                Err(err) => {
                    tracing::error!("Invalid recipient address {}: {}", to, err);
                    return;
                }
            };

            let message = match Message::builder()
                .from(from)
                .to(recipient)
                .subject(subject)
                .body(body)
            {
                Ok(message) => message,
                Err(err) => {
                    tracing::error!("Failed to build email for {}: {}", to, err);
                    return;
                }
            };

            if let Err(err) = transport.send(message).await {
                tracing::error!("Failed to send email to {}: {}", to, err);
            }
        });
    }
}
