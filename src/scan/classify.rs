//! Filename-to-kind classification via static lookup tables.

use std::path::Path;

use crate::model::ConfigKind;

/// Exact base-name matches. Checked first: many dotfiles carry no
/// extension, so a name hit always wins over an extension hit.
const NAME_TABLE: &[(&str, ConfigKind)] = &[
    (".bashrc", ConfigKind::Bash),
    (".bash_profile", ConfigKind::Bash),
    (".bash_aliases", ConfigKind::Bash),
    (".bash_logout", ConfigKind::Bash),
    (".profile", ConfigKind::Bash),
    (".zshrc", ConfigKind::Zsh),
    (".zshenv", ConfigKind::Zsh),
    (".zprofile", ConfigKind::Zsh),
    (".zlogin", ConfigKind::Zsh),
    (".vimrc", ConfigKind::Vim),
    (".gvimrc", ConfigKind::Vim),
    ("init.vim", ConfigKind::Vim),
    (".gitconfig", ConfigKind::Git),
    (".gitignore", ConfigKind::Git),
    (".gitattributes", ConfigKind::Git),
    ("config", ConfigKind::Ssh),
    ("authorized_keys", ConfigKind::Ssh),
    ("known_hosts", ConfigKind::Ssh),
    ("settings.json", ConfigKind::VsCode),
    ("keybindings.json", ConfigKind::VsCode),
    (".tmux.conf", ConfigKind::Custom),
    (".inputrc", ConfigKind::Custom),
    (".editorconfig", ConfigKind::Custom),
];

/// Exact extension matches (without the leading dot).
const EXTENSION_TABLE: &[(&str, ConfigKind)] = &[
    ("sh", ConfigKind::Bash),
    ("bash", ConfigKind::Bash),
    ("zsh", ConfigKind::Zsh),
    ("vim", ConfigKind::Vim),
    ("gitconfig", ConfigKind::Git),
    ("service", ConfigKind::Systemd),
    ("timer", ConfigKind::Systemd),
    ("conf", ConfigKind::Custom),
    ("cfg", ConfigKind::Custom),
    ("ini", ConfigKind::Custom),
];

/// Substrings that mark a file as *some* kind of configuration even when
/// neither table matches. Weakest rule; yields [`ConfigKind::Custom`].
const SUPPORTED_SUBSTRINGS: &[&str] = &["rc", "conf", "config", "cfg", "ini", "profile"];

/// Classify a file by its base name.
///
/// Priority order, first hit wins:
///
/// 1. exact base-name match ([`NAME_TABLE`]);
/// 2. exact extension match ([`EXTENSION_TABLE`]);
/// 3. base name contains a supported-extension substring → `Custom`;
/// 4. `None` — the file is not a configuration candidate.
///
/// # Examples
///
/// ```
/// use dotscan_cli::model::ConfigKind;
/// use dotscan_cli::scan::classify;
///
/// assert_eq!(classify(".bashrc"), Some(ConfigKind::Bash));
/// assert_eq!(classify("units.ini"), Some(ConfigKind::Custom));
/// assert_eq!(classify("photo.png"), None);
/// ```
#[must_use]
pub fn classify(file_name: &str) -> Option<ConfigKind> {
    if let Some(&(_, kind)) = NAME_TABLE.iter().find(|(name, _)| *name == file_name) {
        return Some(kind);
    }

    if let Some(ext) = extension_of(file_name)
        && let Some(&(_, kind)) = EXTENSION_TABLE.iter().find(|(e, _)| *e == ext)
    {
        return Some(kind);
    }

    SUPPORTED_SUBSTRINGS
        .iter()
        .any(|s| file_name.contains(s))
        .then_some(ConfigKind::Custom)
}

/// Extension of `file_name` per [`Path::extension`] semantics: a leading
/// dot alone (`.bashrc`) does not count as an extension.
fn extension_of(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension()?.to_str()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_classify() {
        assert_eq!(classify(".bashrc"), Some(ConfigKind::Bash));
        assert_eq!(classify(".zshrc"), Some(ConfigKind::Zsh));
        assert_eq!(classify(".vimrc"), Some(ConfigKind::Vim));
        assert_eq!(classify(".gitconfig"), Some(ConfigKind::Git));
        assert_eq!(classify("config"), Some(ConfigKind::Ssh));
        assert_eq!(classify("settings.json"), Some(ConfigKind::VsCode));
    }

    #[test]
    fn extension_matches_classify() {
        assert_eq!(classify("install.sh"), Some(ConfigKind::Bash));
        assert_eq!(classify("prompt.zsh"), Some(ConfigKind::Zsh));
        assert_eq!(classify("ftplugin.vim"), Some(ConfigKind::Vim));
        assert_eq!(classify("backup.service"), Some(ConfigKind::Systemd));
        assert_eq!(classify("app.ini"), Some(ConfigKind::Custom));
    }

    #[test]
    fn name_match_beats_extension_match() {
        // "settings.json" has no json extension entry, but a name entry;
        // "init.vim" matches both tables and must take the name's kind.
        assert_eq!(classify("init.vim"), Some(ConfigKind::Vim));
        // A name-table hit wins even when the extension would say otherwise.
        assert_eq!(classify(".tmux.conf"), Some(ConfigKind::Custom));
        assert_eq!(classify(".gitconfig"), Some(ConfigKind::Git));
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        // Path::extension treats ".npmrc" as extensionless, so only the
        // substring fallback can catch it.
        assert_eq!(classify(".npmrc"), Some(ConfigKind::Custom));
    }

    #[test]
    fn substring_fallback_yields_custom() {
        assert_eq!(classify("my-app.config"), Some(ConfigKind::Custom));
        assert_eq!(classify("old_profile_backup"), Some(ConfigKind::Custom));
    }

    #[test]
    fn unrelated_files_do_not_classify() {
        assert_eq!(classify("photo.png"), None);
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("main.rs"), None);
        assert_eq!(classify("Makefile"), None);
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        let mut names: Vec<&str> = NAME_TABLE.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NAME_TABLE.len());

        let mut exts: Vec<&str> = EXTENSION_TABLE.iter().map(|(e, _)| *e).collect();
        exts.sort_unstable();
        exts.dedup();
        assert_eq!(exts.len(), EXTENSION_TABLE.len());
    }
}
