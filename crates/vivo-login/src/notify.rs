use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub type NotifyResult<T> = Result<T, NotifyError>;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("The acknowledgement could not be shown")]
    Unavailable,
}

/// Out-of-band messages the login form reports to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    SignedIn { email: String, remember_me: bool },
    SocialLoginPlaceholder,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedIn { email, remember_me } => {
                let remember = if *remember_me { "Yes" } else { "No" };
                write!(f, "Logged in as {email}\nRemember me: {remember}")
            }
            Self::SocialLoginPlaceholder => f.write_str("Demo: social login placeholder"),
        }
    }
}

/// Capability the form uses to acknowledge actions.
///
/// Implementations decide how the notice reaches the user; the returned future resolves once
/// the acknowledgement has been delivered (or dismissed, for blocking dialogs).
#[async_trait]
pub trait Notifier {
    async fn notify(&self, notice: Notice) -> NotifyResult<()>;
}

#[async_trait]
impl<N: Notifier + Send + Sync + ?Sized> Notifier for std::sync::Arc<N> {
    async fn notify(&self, notice: Notice) -> NotifyResult<()> {
        (**self).notify(notice).await
    }
}

/// Writes notices to the log. Used when the form runs without a UI, e.g. from the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notice: Notice) -> NotifyResult<()> {
        tracing::info!(%notice, "Login form acknowledgement");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_text() {
        let notice = Notice::SignedIn {
            email: "user@example.com".into(),
            remember_me: true,
        };
        assert_eq!(notice.to_string(), "Logged in as user@example.com\nRemember me: Yes");

        let notice = Notice::SignedIn {
            email: "user@example.com".into(),
            remember_me: false,
        };
        assert_eq!(notice.to_string(), "Logged in as user@example.com\nRemember me: No");
    }

    #[test]
    fn placeholder_text() {
        assert_eq!(
            Notice::SocialLoginPlaceholder.to_string(),
            "Demo: social login placeholder"
        );
    }

    #[tokio::test]
    async fn tracing_notifier_never_fails() {
        let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

        TracingNotifier.notify(Notice::SocialLoginPlaceholder).await.unwrap();
    }
}
