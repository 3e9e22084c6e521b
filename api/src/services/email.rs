//! Result notification rendering and SMTP delivery.
//!
//! The release coordinator talks to the outside world through the [`Mailer`]
//! trait so that tests can swap in a recording double. The production
//! implementation sends through Gmail's SMTP relay using `lettre`, configured
//! via `util::config`:
//!
//! - `GMAIL_USERNAME`: Gmail address to send from
//! - `GMAIL_APP_PASSWORD`: Gmail app password
//! - `EMAIL_FROM_NAME`: display name for the sender

use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{
    AsyncTransport, Tokio1Executor,
    message::{Message, MultiPart, SinglePart, header},
    transport::smtp::{AsyncSmtpTransport, authentication::Credentials},
};
use util::config;

pub type MailError = Box<dyn std::error::Error + Send + Sync>;

/// Percentage below which a score is presented as failing.
pub const PASS_THRESHOLD_PERCENT: i32 = 50;

/// Everything needed to render one student's result notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEmail {
    pub student_name: String,
    pub exam_name: String,
    pub class_label: String,
    pub score: i32,
    pub total_score: i32,
}

impl ResultEmail {
    /// Score as a rounded (not truncated) percentage: 1/3 renders as 33%,
    /// 2/3 as 67%.
    pub fn percentage(&self) -> i32 {
        (self.score as f64 * 100.0 / self.total_score as f64).round() as i32
    }

    pub fn is_passing(&self) -> bool {
        self.percentage() >= PASS_THRESHOLD_PERCENT
    }

    pub fn subject(&self) -> String {
        format!("Exam Results: {}", self.exam_name)
    }

    fn plain_body(&self) -> String {
        format!(
            "Hello {},\n\n\
            Your results for the {} in {} have been released.\n\n\
            Your score: {} / {} ({}%)\n\n\
            Best regards,\n\
            {}",
            self.student_name,
            self.exam_name,
            self.class_label,
            self.score,
            self.total_score,
            self.percentage(),
            config::email_from_name(),
        )
    }

    fn html_body(&self) -> String {
        let score_color = if self.is_passing() { "#146939" } else { "#b91c1c" };

        format!(
            r#"<!DOCTYPE html>
            <html>
            <head>
                <style>
                    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #525f7f; }}
                    .container {{ max-width: 560px; margin: 0 auto; padding: 20px 0 48px; }}
                    h1 {{ color: #17321A; font-size: 24px; }}
                    .score-box {{
                        padding: 24px;
                        border: 1px solid #e6e6e6;
                        border-radius: 12px;
                        text-align: center;
                        margin: 32px 0;
                        background-color: #f9fafb;
                    }}
                    .score {{ font-size: 48px; font-weight: 700; color: {score_color}; }}
                    .total {{ font-size: 24px; color: #8898aa; font-weight: 400; }}
                </style>
            </head>
            <body>
                <div class="container">
                    <h1>Exam Results Notification</h1>
                    <p>Hello <strong>{student}</strong>,</p>
                    <p>Your results for the <strong>{exam}</strong> in <strong>{class}</strong> have been released.</p>
                    <div class="score-box">
                        <p>Your Score</p>
                        <p class="score">{score} <span class="total">/ {total}</span></p>
                        <p>({percentage}%)</p>
                    </div>
                    <p>Best regards,<br>{from}</p>
                </div>
            </body>
            </html>"#,
            score_color = score_color,
            student = self.student_name,
            exam = self.exam_name,
            class = self.class_label,
            score = self.score,
            total = self.total_score,
            percentage = self.percentage(),
            from = config::email_from_name(),
        )
    }
}

/// Outbound channel for result notifications.
///
/// One call, one recipient, one success/failure. Implementations must be
/// safe to invoke concurrently since the release fan-out dispatches all
/// recipients at once.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send_result_email(&self, to_email: &str, email: &ResultEmail)
    -> Result<(), MailError>;
}

/// Production `Mailer` sending through Gmail's SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds a transport for `smtp.gmail.com:587` with mandatory TLS,
    /// authenticated with the configured Gmail app credentials.
    pub fn from_config() -> Result<Self, MailError> {
        let tls_parameters = TlsParameters::new("smtp.gmail.com".to_string())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay("smtp.gmail.com")?
            .port(587)
            .tls(Tls::Required(tls_parameters))
            .credentials(Credentials::new(
                config::gmail_username(),
                config::gmail_app_password(),
            ))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send_result_email(
        &self,
        to_email: &str,
        email: &ResultEmail,
    ) -> Result<(), MailError> {
        let from = format!("{} <{}>", config::email_from_name(), config::gmail_username());

        let message = Message::builder()
            .from(from.parse()?)
            .to(to_email.parse()?)
            .subject(email.subject())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(email.plain_body()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(email.html_body()),
                    ),
            )?;

        self.transport.send(message).await?;
        Ok(())
    }
}
