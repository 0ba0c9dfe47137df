//! Flat string interner.
//!
//! Identifiers and string-literal contents are interned once during lexing
//! so later passes compare `Name`s (an O(1) integer compare) instead of
//! re-hashing text. Strings are leaked to obtain a `'static` lifetime. A
//! `Name` is only a valid index into the table that produced it, so one
//! interner is shared by a host's builtin registrations and every source
//! file it subsequently runs, rather than being rebuilt per run.

use rustc_hash::FxHashMap;

use crate::Name;

pub struct StringInterner {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl StringInterner {
    #[must_use]
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let leaked: &'static str = Box::leak(text.to_string().into_boxed_str());
        let name = Name::from_raw(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(leaked);
        self.map.insert(leaked, name);
        name
    }

    #[must_use]
    pub fn lookup(&self, name: Name) -> &str {
        self.strings[name.index()]
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
