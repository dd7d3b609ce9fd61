//! Outbound deep links (e-mail, WhatsApp) and the platform URI launcher.

use crate::model::LinkError;
use tracing::debug;

/// Subject line of the interest e-mail.
pub const EMAIL_SUBJECT: &str = "Interesse na coleta de resíduos";

/// Prefilled WhatsApp message text.
pub const WHATSAPP_TEXT: &str = "Tenho interesse sobre coleta de resíduos.";

/// `mailto:` URI addressed to `email` with the interest subject.
///
/// The address and subject are embedded verbatim.
pub fn mail_uri(email: &str) -> String {
    format!("mailto:{email}?subject={EMAIL_SUBJECT}")
}

/// `whatsapp://send` URI for `phone` with the interest text.
pub fn whatsapp_uri(phone: &str) -> String {
    format!("whatsapp://send?phone={phone}&text={WHATSAPP_TEXT}")
}

/// Platform URI dispatcher.
pub trait LinkOpener {
    /// Whether some application is registered for the URI's scheme.
    fn can_open(&self, uri: &str) -> bool;

    /// Hand the URI to the platform.
    fn open(&self, uri: &str) -> Result<(), LinkError>;
}

/// Check support first, then open. `open` is not attempted when the
/// platform reports no handler.
pub fn open_checked(opener: &dyn LinkOpener, uri: &str) -> Result<(), LinkError> {
    if !opener.can_open(uri) {
        return Err(LinkError::Unsupported {
            uri: uri.to_string(),
        });
    }
    opener.open(uri)
}

/// Launcher backed by the desktop environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// New launcher.
    pub fn new() -> Self {
        Self
    }
}

fn scheme_of(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.split_once(':')?;
    let valid = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

fn is_builtin_scheme(scheme: &str) -> bool {
    matches!(
        scheme.to_ascii_lowercase().as_str(),
        "mailto" | "http" | "https"
    )
}

#[cfg(target_os = "linux")]
fn has_scheme_handler(scheme: &str) -> bool {
    let mime = format!("x-scheme-handler/{}", scheme.to_ascii_lowercase());
    match std::process::Command::new("xdg-mime")
        .args(["query", "default", &mime])
        .output()
    {
        Ok(output) => {
            output.status.success() && !String::from_utf8_lossy(&output.stdout).trim().is_empty()
        }
        Err(e) => {
            debug!(error = %e, "xdg-mime unavailable, using built-in scheme list");
            is_builtin_scheme(scheme)
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn has_scheme_handler(scheme: &str) -> bool {
    is_builtin_scheme(scheme)
}

impl LinkOpener for SystemOpener {
    fn can_open(&self, uri: &str) -> bool {
        match scheme_of(uri) {
            Some(scheme) => has_scheme_handler(scheme),
            None => false,
        }
    }

    fn open(&self, uri: &str) -> Result<(), LinkError> {
        debug!(uri, "opening link");
        open::that_detached(uri).map_err(|e| LinkError::Launch {
            uri: uri.to_string(),
            reason: e.to_string(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingOpener;
    use super::*;

    #[test]
    fn mail_uri_embeds_address_and_subject() {
        assert_eq!(
            mail_uri("contato@reciclar.com.br"),
            "mailto:contato@reciclar.com.br?subject=Interesse na coleta de resíduos"
        );
    }

    #[test]
    fn whatsapp_uri_embeds_phone_and_text() {
        assert_eq!(
            whatsapp_uri("5511999998888"),
            "whatsapp://send?phone=5511999998888&text=Tenho interesse sobre coleta de resíduos."
        );
    }

    #[test]
    fn open_checked_never_opens_unsupported_uri() {
        let opener = RecordingOpener::unsupporting();
        let err = open_checked(&opener, "mailto:a@b.c").unwrap_err();
        assert_eq!(
            err,
            LinkError::Unsupported {
                uri: "mailto:a@b.c".into()
            }
        );
        assert_eq!(opener.checked.borrow().len(), 1);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn open_checked_opens_supported_uri() {
        let opener = RecordingOpener::supporting();
        open_checked(&opener, "mailto:a@b.c").unwrap();
        assert_eq!(*opener.opened.borrow(), vec!["mailto:a@b.c".to_string()]);
    }

    #[test]
    fn open_checked_propagates_launch_error() {
        let opener = RecordingOpener::failing("no display");
        let err = open_checked(&opener, "mailto:a@b.c").unwrap_err();
        assert!(matches!(err, LinkError::Launch { .. }));
    }

    #[test]
    fn scheme_parsing() {
        assert_eq!(scheme_of("mailto:x@y"), Some("mailto"));
        assert_eq!(scheme_of("whatsapp://send?phone=1"), Some("whatsapp"));
        assert_eq!(scheme_of("no scheme here"), None);
        assert_eq!(scheme_of(":empty"), None);
    }

    #[test]
    fn uri_without_scheme_is_never_openable() {
        assert!(!SystemOpener::new().can_open("just text"));
    }
}
