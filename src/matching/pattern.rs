use crate::foundation::core::IllustrationRequest;

/// Literal every illustration texture name starts with.
pub(crate) const NAME_PREFIX: &str = "char_";
/// Substring that marks a texture as an alpha mask.
pub(crate) const ALPHA_MARKER: &str = "[alpha]";
/// Marker after the codename (or skin number) that denotes a backup texture.
const BACKUP_MARKER: char = 'b';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NameVerdict {
    Match,
    Miss,
    /// The codename matched but carries the backup marker.
    Backup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchMode {
    /// `char_<rev>_<codename>#<n>`, case-insensitive, backup marker rejects.
    Skin,
    /// `char_<rev>_<codename>` not followed by the backup marker, case-sensitive.
    Regular,
}

/// Texture name matcher for one request.
///
/// Names have the shape `char_<revision digits>_<codename>[#<n>][b][[alpha]]`. The
/// codename may appear anywhere in the name and anything may follow it.
#[derive(Clone, Debug)]
pub(crate) struct NamePattern {
    mode: MatchMode,
    codename: String,
    skin_number: Option<String>,
}

impl NamePattern {
    pub(crate) fn for_request(request: &IllustrationRequest) -> Self {
        let suffix = request.raw_variant_suffix();
        if request.variant_kind().is_skin() {
            Self {
                mode: MatchMode::Skin,
                codename: request.image_codename().to_lowercase(),
                skin_number: suffix.map(str::to_string),
            }
        } else {
            Self {
                mode: MatchMode::Regular,
                codename: format!("{}{}", request.image_codename(), suffix.unwrap_or("")),
                skin_number: None,
            }
        }
    }

    pub(crate) fn verdict(&self, name: &str) -> NameVerdict {
        match self.mode {
            MatchMode::Skin => self.skin_verdict(name),
            MatchMode::Regular => self.regular_verdict(name),
        }
    }

    // Only the leftmost `#<digits>` hit counts; a backup marker there rejects the name
    // even if a later position would match cleanly.
    fn skin_verdict(&self, name: &str) -> NameVerdict {
        let lowered = name.to_lowercase();
        for tail in codename_tails(&lowered, &self.codename) {
            let Some(after_hash) = tail.strip_prefix('#') else {
                continue;
            };
            let digits_len = after_hash.bytes().take_while(u8::is_ascii_digit).count();
            let (digits, rest) = after_hash.split_at(digits_len);
            if let Some(pinned) = &self.skin_number
                && digits != pinned.as_str()
            {
                continue;
            }
            if rest.starts_with(BACKUP_MARKER) {
                return NameVerdict::Backup;
            }
            return NameVerdict::Match;
        }
        NameVerdict::Miss
    }

    fn regular_verdict(&self, name: &str) -> NameVerdict {
        let mut saw_backup = false;
        for tail in codename_tails(name, &self.codename) {
            if !tail.starts_with(BACKUP_MARKER) {
                return NameVerdict::Match;
            }
            saw_backup = true;
        }
        if saw_backup {
            NameVerdict::Backup
        } else {
            NameVerdict::Miss
        }
    }
}

pub(crate) fn has_alpha_marker(name: &str) -> bool {
    name.contains(ALPHA_MARKER)
}

/// Text following each `char_<digits>_<codename>` occurrence in `name`, left to right.
fn codename_tails<'a>(name: &'a str, codename: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    name.match_indices(NAME_PREFIX).filter_map(move |(at, _)| {
        let rest = &name[at + NAME_PREFIX.len()..];
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
        rest.strip_prefix('_')?.strip_prefix(codename)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/matching/pattern.rs"]
mod tests;
