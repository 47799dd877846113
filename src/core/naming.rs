//! Canonical secret names, store-prefix selection and collision handling.

use crate::core::sanitize::sanitize;
use crate::core::store::SecretStore;
use crate::error::Result;
use crate::models::wizard_kind::WizardKind;
use crate::prompt::Prompter;

pub const ROOT_STORE_LABEL: &str = "<root>";

/// `<prefix/><kind root>/<sanitized components...>`.
///
/// Components that sanitize to empty are skipped.
pub fn build_name(store_prefix: &str, kind: WizardKind, components: &[&str]) -> String {
    let mut name = String::new();
    if !store_prefix.is_empty() {
        name.push_str(store_prefix);
        if !store_prefix.ends_with('/') {
            name.push('/');
        }
    }
    name.push_str(kind.name_root());
    for component in components {
        let segment = sanitize(component);
        if segment.is_empty() {
            continue;
        }
        name.push('/');
        name.push_str(&segment);
    }
    name
}

/// Ask which mount point to create the secret in. Empty means the root store.
pub fn choose_store_prefix(store: &dyn SecretStore, prompter: &mut dyn Prompter) -> Result<String> {
    let mounts = store.mount_points();
    if mounts.is_empty() {
        return Ok(String::new());
    }
    let mut items = Vec::with_capacity(mounts.len() + 1);
    items.push(ROOT_STORE_LABEL.to_string());
    items.extend(mounts.iter().cloned());

    let choice = prompter.select("Please select the store you would like to use", &items)?;
    Ok(match choice {
        Some(index) if index > 0 => mounts.get(index - 1).cloned().unwrap_or_default(),
        _ => String::new(),
    })
}

/// If `candidate` is taken, ask once for another name.
///
/// The replacement is not checked again: a taken replacement is written
/// over.
pub fn resolve_collision(
    store: &dyn SecretStore,
    prompter: &mut dyn Prompter,
    candidate: String,
) -> Result<String> {
    if !store.exists(&candidate) {
        return Ok(candidate);
    }
    tracing::debug!(name = %candidate, "secret already exists, asking for another path");
    prompter.ask_string(
        "Secret already exists, please choose another path",
        &candidate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::models::secret::Secret;
    use crate::prompt::{Answer, ScriptedPrompter};

    #[test]
    fn test_build_name_templates() {
        assert_eq!(
            build_name("", WizardKind::Website, &["example.com", "bob"]),
            "websites/example.com/bob"
        );
        assert_eq!(
            build_name("", WizardKind::Pin, &["My Bank", "Credit Card"]),
            "pins/My_Bank/Credit_Card"
        );
        assert_eq!(build_name("", WizardKind::Generic, &["test"]), "misc/test");
        assert_eq!(
            build_name("", WizardKind::AwsIam, &["acme", "deploy"]),
            "aws/iam/acme/deploy"
        );
        assert_eq!(
            build_name("", WizardKind::GcpServiceAccount, &["project-123", "svc"]),
            "gcp/iam/project-123/svc"
        );
    }

    #[test]
    fn test_build_name_with_prefix() {
        assert_eq!(build_name("work", WizardKind::Generic, &["x"]), "work/misc/x");
        assert_eq!(build_name("work/", WizardKind::Generic, &["x"]), "work/misc/x");
    }

    #[test]
    fn test_build_name_never_keeps_separators() {
        let name = build_name("", WizardKind::Generic, &["a/b/../c"]);
        assert_eq!(name, "misc/a_b_.._c");
        assert_eq!(name.matches('/').count(), 1);
    }

    #[test]
    fn test_build_name_skips_empty_segments() {
        assert_eq!(
            build_name("", WizardKind::Website, &["example.com", ""]),
            "websites/example.com"
        );
    }

    #[test]
    fn test_no_mounts_means_root_without_prompt() {
        let store = MemoryStore::new();
        let mut prompter = ScriptedPrompter::default();
        assert_eq!(choose_store_prefix(&store, &mut prompter).unwrap(), "");
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_choose_mount() {
        let store = MemoryStore::with_mounts(&["personal", "work"]);
        let mut prompter = ScriptedPrompter::new([Answer::Choice(2)]);
        assert_eq!(choose_store_prefix(&store, &mut prompter).unwrap(), "work");

        let mut prompter = ScriptedPrompter::new([Answer::Choice(0)]);
        assert_eq!(choose_store_prefix(&store, &mut prompter).unwrap(), "");
    }

    #[test]
    fn test_cancelled_mount_menu_falls_back_to_root() {
        let store = MemoryStore::with_mounts(&["work"]);
        let mut prompter = ScriptedPrompter::new([Answer::Abort]);
        assert_eq!(choose_store_prefix(&store, &mut prompter).unwrap(), "");
    }

    #[test]
    fn test_free_name_is_kept_without_prompt() {
        let store = MemoryStore::new();
        let mut prompter = ScriptedPrompter::default();
        let name = resolve_collision(&store, &mut prompter, "misc/free".into()).unwrap();
        assert_eq!(name, "misc/free");
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_collision_defaults_to_candidate() {
        let mut store = MemoryStore::new();
        store.insert("misc/taken", Secret::default());
        let mut prompter = ScriptedPrompter::new([Answer::Default]);
        let name = resolve_collision(&store, &mut prompter, "misc/taken".into()).unwrap();
        assert_eq!(name, "misc/taken");
    }

    // Documents current behavior: the replacement is accepted even when it
    // is itself taken. There is no second existence check or retry loop.
    #[test]
    fn test_collision_prompts_exactly_once_without_recheck() {
        let mut store = MemoryStore::new();
        store.insert("misc/taken", Secret::default());
        store.insert("misc/also-taken", Secret::default());
        let mut prompter = ScriptedPrompter::new([Answer::text("misc/also-taken")]);
        let name = resolve_collision(&store, &mut prompter, "misc/taken".into()).unwrap();
        assert_eq!(name, "misc/also-taken");
        assert_eq!(prompter.count_asked("already exists"), 1);
    }

    #[test]
    fn test_collision_prompt_abort() {
        let mut store = MemoryStore::new();
        store.insert("misc/taken", Secret::default());
        let mut prompter = ScriptedPrompter::new([Answer::Abort]);
        let err = resolve_collision(&store, &mut prompter, "misc/taken".into()).unwrap_err();
        assert!(err.is_aborted());
    }
}
