use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::locale::Locale;
use crate::I18nError;

const BUNDLED: [(Locale, &str); 2] = [
    (Locale::Pt, include_str!("../locales/pt.yaml")),
    (Locale::En, include_str!("../locales/en.yaml")),
];

/// Catalogs for every supported locale.
#[derive(Clone, Debug, Default)]
pub struct TranslationTables {
    pt: Catalog,
    en: Catalog,
}

impl TranslationTables {
    /// Empty tables; every lookup falls back to the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's own translations, compiled into the binary.
    pub fn bundled() -> Result<Self, I18nError> {
        let mut tables = Self::new();
        for (locale, src) in BUNDLED {
            tables.load_str(locale, src)?;
        }
        Ok(tables)
    }

    /// Parse a YAML catalog and install it for `locale`, replacing the previous one.
    pub fn load_str(&mut self, locale: Locale, src: &str) -> Result<(), I18nError> {
        let catalog =
            Catalog::parse(src).map_err(|source| I18nError::Catalog { locale, source })?;
        self.insert(locale, catalog);
        Ok(())
    }

    pub fn insert(&mut self, locale: Locale, catalog: Catalog) {
        *self.catalog_mut(locale) = catalog;
    }

    pub fn catalog(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::Pt => &self.pt,
            Locale::En => &self.en,
        }
    }

    fn catalog_mut(&mut self, locale: Locale) -> &mut Catalog {
        match locale {
            Locale::Pt => &mut self.pt,
            Locale::En => &mut self.en,
        }
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.catalog(locale).get(key)
    }

    /// Compare key sets across locales.
    pub fn parity(&self) -> ParityReport {
        let all: BTreeSet<&str> = Locale::ALL
            .iter()
            .flat_map(|l| self.catalog(*l).keys())
            .collect();

        let missing = Locale::ALL
            .iter()
            .map(|l| {
                let cat = self.catalog(*l);
                let keys = all
                    .iter()
                    .filter(|k| !cat.contains_key(k))
                    .map(|k| k.to_string())
                    .collect();
                (*l, keys)
            })
            .collect();

        ParityReport { missing }
    }
}

/// Keys absent from a locale that some other locale defines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityReport {
    missing: Vec<(Locale, Vec<String>)>,
}

impl ParityReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.iter().all(|(_, keys)| keys.is_empty())
    }

    /// Sorted keys missing from `locale`.
    pub fn missing_in(&self, locale: Locale) -> &[String] {
        self.missing
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parity_lists_keys_missing_on_each_side() {
        let mut tables = TranslationTables::new();
        tables.load_str(Locale::Pt, "a: um\nb: dois\n").unwrap();
        tables.load_str(Locale::En, "b: two\nc: three\n").unwrap();

        let report = tables.parity();
        assert!(!report.is_consistent());
        assert_eq!(report.missing_in(Locale::Pt), ["c".to_string()]);
        assert_eq!(report.missing_in(Locale::En), ["a".to_string()]);
    }

    #[test]
    fn empty_tables_are_consistent() {
        assert!(TranslationTables::new().parity().is_consistent());
    }

    #[test]
    fn catalog_errors_name_the_locale() {
        let mut tables = TranslationTables::new();
        let err = tables.load_str(Locale::En, "- nope\n").unwrap_err();
        assert!(err.to_string().starts_with("en catalog:"));
    }
}
