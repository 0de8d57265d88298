//! Subscriber email delivery over SMTP
//!
//! Defaults match the site's Zoho account; any STARTTLS relay works. Send
//! failures are reported per recipient and never abort the caller.

use std::collections::HashMap;
use std::env;

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Serialize;
use thiserror::Error;

const DEFAULT_SMTP_SERVER: &str = "smtp.zoho.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Email delivery error types
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("missing required email configuration: {fields}")]
    MissingConfig { fields: String },

    #[error("invalid email configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// SMTP connection settings
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_email: String,
    pub smtp_password: String,
}

impl EmailConfig {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, EmailError> {
        let smtp_port = match env::var("SMTP_PORT") {
            Ok(value) => value.parse().map_err(|_| EmailError::InvalidConfig {
                field: "SMTP_PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        let config = Self {
            smtp_server: env::var("SMTP_SERVER").unwrap_or_else(|_| DEFAULT_SMTP_SERVER.to_string()),
            smtp_port,
            smtp_email: env::var("SMTP_EMAIL").unwrap_or_default(),
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), EmailError> {
        let mut missing = Vec::new();
        if self.smtp_email.is_empty() {
            missing.push("SMTP_EMAIL");
        }
        if self.smtp_password.is_empty() {
            missing.push("SMTP_PASSWORD");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(EmailError::MissingConfig {
                fields: missing.join(", "),
            })
        }
    }
}

/// One email's subject and bodies
#[derive(Debug, Clone)]
pub struct EmailContent {
    pub subject: String,
    pub body_html: String,
    pub body_text: String,
}

/// Outcome of a bulk send
#[derive(Debug, Clone, Serialize)]
pub struct DeliverySummary {
    pub sent: usize,
    pub failed: usize,
}

/// SMTP email service
#[derive(Debug)]
pub struct EmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl EmailService {
    /// Create a service from explicit settings
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        config.validate()?;

        let sender: Mailbox = config.smtp_email.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(Credentials::new(config.smtp_email, config.smtp_password))
            .build();

        Ok(Self { transport, sender })
    }

    /// Create a service from environment configuration
    pub fn from_env() -> Result<Self, EmailError> {
        Self::new(EmailConfig::from_env()?)
    }

    /// Send a single email. Returns whether delivery was accepted; failures
    /// are logged, not propagated.
    pub async fn send_email(&self, to_email: &str, content: &EmailContent) -> bool {
        let message = match self.build_message(to_email, content) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("failed to build email for {to_email}: {e}");
                return false;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => {
                tracing::info!("email sent to {to_email}");
                true
            }
            Err(e) => {
                tracing::error!("failed to send email to {to_email}: {e}");
                false
            }
        }
    }

    /// Send to multiple recipients, reporting success per address
    pub async fn send_bulk_email(&self, to_emails: &[String], content: &EmailContent) -> HashMap<String, bool> {
        let mut results = HashMap::new();
        for email in to_emails {
            let delivered = self.send_email(email, content).await;
            results.insert(email.clone(), delivered);
        }
        results
    }

    /// Send a newsletter and summarize the outcome
    pub async fn send_newsletter(&self, subscribers: &[String], subject: &str, html_body: &str) -> DeliverySummary {
        let content = EmailContent {
            subject: subject.to_string(),
            body_html: html_body.to_string(),
            body_text: String::new(),
        };

        let results = self.send_bulk_email(subscribers, &content).await;
        let sent = results.values().filter(|delivered| **delivered).count();
        let summary = DeliverySummary {
            sent,
            failed: results.len() - sent,
        };

        tracing::info!("newsletter: {} sent, {} failed", summary.sent, summary.failed);
        summary
    }

    /// Welcome email for a new subscriber
    pub async fn send_welcome_email(&self, subscriber_email: &str) -> bool {
        let content = EmailContent {
            subject: "Welcome to Our Travel Blog!".to_string(),
            body_html: welcome_body_html(),
            body_text: "Thank you for subscribing to our luxury travel content from South Africa.".to_string(),
        };

        self.send_email(subscriber_email, &content).await
    }

    /// Notify subscribers that a new post is live
    pub async fn send_new_post_notification(
        &self,
        subscribers: &[String],
        post_title: &str,
        post_url: &str,
    ) -> DeliverySummary {
        self.send_newsletter(
            subscribers,
            &format!("New Blog Post: {post_title}"),
            &new_post_body_html(post_title, post_url),
        )
        .await
    }

    /// Verify the SMTP connection and credentials
    pub async fn test_connection(&self) -> bool {
        match self.transport.test_connection().await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!("email connection test failed: {e}");
                false
            }
        }
    }

    fn build_message(&self, to_email: &str, content: &EmailContent) -> Result<Message, EmailError> {
        let body_text = if content.body_text.is_empty() {
            content.subject.clone()
        } else {
            content.body_text.clone()
        };

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to_email.parse()?)
            .subject(content.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                body_text,
                content.body_html.clone(),
            ))?;

        Ok(message)
    }
}

fn welcome_body_html() -> String {
    r#"<html>
    <body style="font-family: Arial, sans-serif; color: #333;">
        <h2 style="color: #0066cc;">Welcome to Our Travel Blog!</h2>
        <p>Thank you for subscribing to our luxury travel content from South Africa.</p>
        <p>You'll receive:</p>
        <ul>
            <li>Weekly articles about luxury travel experiences</li>
            <li>Exclusive travel deals and recommendations</li>
            <li>Insider tips and hidden gems</li>
            <li>Special offers from our partners</li>
        </ul>
        <p>Best regards,<br>The Travel Blog Team</p>
    </body>
</html>"#
        .to_string()
}

fn new_post_body_html(post_title: &str, post_url: &str) -> String {
    format!(
        r#"<html>
    <body style="font-family: Arial, sans-serif; color: #333;">
        <h2 style="color: #0066cc;">New Blog Post Published!</h2>
        <h3>{post_title}</h3>
        <p>Check out our latest article about luxury travel in South Africa.</p>
        <p><a href="{post_url}" style="background: #0066cc; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px; display: inline-block;">Read Now</a></p>
        <p>Best regards,<br>The Travel Blog Team</p>
    </body>
</html>"#
    )
}
