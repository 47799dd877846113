use super::{Created, Creator};
use crate::error::Result;
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;

impl Creator<'_> {
    /// Numerical PIN, named after the issuing authority and what it unlocks.
    pub(super) fn create_pin(&mut self) -> Result<Created> {
        self.header("Creating numerical PIN ...")?;
        let authority = self.ask_required(
            "Please enter the authority (e.g. MyBank) this PIN is for",
            "Authority",
        )?;
        let application = self.ask_required(
            "Please enter the entity (e.g. Credit Card) this PIN is for",
            "Application",
        )?;
        let pin = self.pin_value()?;
        let comment = self.ask_optional("Comments (optional)")?;

        let name = self.secret_name(WizardKind::Pin, &[&authority, &application])?;

        let mut sec = Secret::new(pin.secret.as_str(), None);
        sec.set_field("application", &application)?;
        sec.set_field("comment", &comment)?;
        self.commit(&name, &sec)?;

        self.print_or_copy(WizardKind::Pin, &name, &pin)?;
        Ok(Created {
            kind: WizardKind::Pin,
            name,
            generated: pin.generated,
        })
    }
}
