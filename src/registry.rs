use std::{collections::BTreeMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{LONG_PROFILE, Profile, ProfileError, SHORT_PROFILE};

static PRESETS: LazyLock<ProfileRegistry> = LazyLock::new(ProfileRegistry::builtin);

/// The built-in profiles, shared by the whole process.
pub fn presets() -> &'static ProfileRegistry {
    &PRESETS
}

/// Profiles keyed by name, iterated in name order.
///
/// Deserializes from a map of name to profile; each profile is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileRegistry {
    /// Creates an empty registry
    pub const fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Registry holding the `short` and `long` presets
    pub fn builtin() -> Self {
        let profiles = BTreeMap::from([
            (SHORT_PROFILE.to_owned(), Profile::short()),
            (LONG_PROFILE.to_owned(), Profile::long()),
        ]);
        Self { profiles }
    }

    /// Adds a profile under `name`.
    ///
    /// # Errors
    /// Returns `ProfileError::DuplicateProfile` if `name` is already taken;
    /// the existing profile is kept.
    pub fn register(&mut self, name: impl Into<String>, profile: Profile) -> Result<(), ProfileError> {
        let name = name.into();
        if self.profiles.contains_key(&name) {
            #[cfg(feature = "log")]
            log::warn!("calendar profile {name:?} is already registered");
            return Err(ProfileError::DuplicateProfile(name));
        }
        #[cfg(feature = "log")]
        log::debug!("registered calendar profile {name:?}");
        self.profiles.insert(name, profile);
        Ok(())
    }

    /// Looks up `name`
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Looks up `name`, failing if it is not registered.
    ///
    /// # Errors
    /// Returns `ProfileError::UnknownProfile` for an unregistered name.
    pub fn require(&self, name: &str) -> Result<&Profile, ProfileError> {
        self.get(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_owned()))
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Registered names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Name and profile pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    /// Returns the number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is registered
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
