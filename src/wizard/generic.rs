use super::{Created, Creator};
use crate::error::Result;
use crate::models::secret::Secret;
use crate::models::wizard_kind::WizardKind;

impl Creator<'_> {
    /// Password plus any number of free-form key/value pairs.
    pub(super) fn create_generic(&mut self) -> Result<Created> {
        self.header("Creating generic secret ...")?;
        let shortname = self.ask_required("Please enter a name for the secret", "Name")?;
        let password =
            self.password_value(&format!("Please enter the password for {}", shortname))?;

        let name = self.secret_name(WizardKind::Generic, &[&shortname])?;

        let mut sec = Secret::new(password.secret.as_str(), None);
        self.say("Enter zero or more key value pairs for this secret:")?;
        loop {
            let key = self
                .prompter
                .ask_string("Name for Key Value pair (enter to quit)", "")?;
            if key.is_empty() {
                break;
            }
            let value = self
                .prompter
                .ask_string(&format!("Value for Key '{}'", key), "")?;
            sec.set_field(&key, &value)?;
        }
        self.commit(&name, &sec)?;

        self.print_or_copy(WizardKind::Generic, &name, &password)?;
        Ok(Created {
            kind: WizardKind::Generic,
            name,
            generated: password.generated,
        })
    }
}
