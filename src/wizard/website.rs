use super::{Created, Creator};
use crate::core::sanitize;
use crate::error::{Result, WizardError};
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;

impl Creator<'_> {
    /// URL, login and password for a website.
    pub(super) fn create_website(&mut self) -> Result<Created> {
        self.header("Creating Website login ...")?;
        let url = self.prompter.ask_string("Please enter the URL", "")?;
        let hostname = sanitize::extract_hostname(&url);
        if hostname.is_empty() {
            return Err(WizardError::Validation {
                field: "URL",
                reason: format!("'{}' does not contain a usable hostname", url),
            });
        }

        let username = self
            .prompter
            .ask_string("Please enter the Username/Login", "")?;
        let password = self.password_value(&format!("Please enter the password for {}", username))?;
        let comment = self.ask_optional("Comments (optional)")?;

        let name = self.secret_name(WizardKind::Website, &[&hostname, &username])?;

        let mut sec = Secret::new(password.secret.as_str(), None);
        sec.set_field("url", &url)?;
        sec.set_field("username", &username)?;
        sec.set_field("comment", &comment)?;
        self.commit(&name, &sec)?;

        self.print_or_copy(WizardKind::Website, &name, &password)?;
        Ok(Created {
            kind: WizardKind::Website,
            name,
            generated: password.generated,
        })
    }
}
