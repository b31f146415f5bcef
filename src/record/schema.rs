//! Record schemas: which sections to look for and which fields to read in each.

use crate::config::Locale;
use crate::extract::{ExtractionStrategy, FieldSpec};

const PERSON_BLOCK_TAG: &str = "div";
const PERSON_BLOCK_CLASS: &str = "person-description";
const PERSON_NAME_CLASS: &str = "person-description__name";
const PERSON_ROLE_CLASS: &str = "person-description__position";

const PRESIDENT: &str = "Президент";
const VICE_PRESIDENT: &str = "Вице-президент";
const LEGAL_ADDRESS: &str = "Юридический адрес";
const PHONE: &str = "Телефон";
const PHONE_SHORT: &str = "Тел.";
const FAX: &str = "Факс";
const EMAIL: &str = "e-mail";

/// Russian display names for the section titles and field names below.
/// Records keep the English names; only rendering is localized.
const RUSSIAN_NAMES: &[(&str, &str)] = &[
    ("Kazakhstan federation", "Казахстанская федерация"),
    ("International federation", "Международная федерация"),
    ("Website", "Сайт"),
    ("President", PRESIDENT),
    ("Vice-president", VICE_PRESIDENT),
    ("Legal address", LEGAL_ADDRESS),
    ("Phone", PHONE),
    ("Fax", FAX),
    ("Email", "E-mail"),
];

/// Name of a section or field as shown in `locale`. Names without a
/// translation are returned as they are.
pub fn display_name(name: &str, locale: Locale) -> &str {
    match locale {
        Locale::En => name,
        Locale::Ru => RUSSIAN_NAMES
            .iter()
            .find(|(en, _)| *en == name)
            .map_or(name, |&(_, ru)| ru),
    }
}

/// How a section is found in a document.
#[derive(Debug, Clone)]
pub struct SectionLocator {
    /// Element id tried first.
    pub id: Option<String>,
    /// Heading phrase searched for, case-insensitively, when the id is absent.
    pub phrase: String,
}

#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub title: String,
    pub locator: SectionLocator,
    pub fields: Vec<FieldSpec>,
}

/// Sections × fields applied to every page of a job, plus whether the page
/// carries a medal tally.
#[derive(Debug, Clone)]
pub struct Schema {
    pub sections: Vec<SectionSpec>,
    pub medals: bool,
}

impl Schema {
    /// The federation page layout on olympic.kz: a Kazakhstan federation
    /// block, an international federation block and the medal tally.
    pub fn federation() -> Self {
        Self {
            sections: vec![
                SectionSpec {
                    title: "Kazakhstan federation".to_string(),
                    locator: SectionLocator {
                        id: Some("section-local_description".to_string()),
                        phrase: "Казахстанская федерация".to_string(),
                    },
                    fields: vec![
                        website(),
                        president(),
                        FieldSpec::new(
                            "Vice-president",
                            VICE_PRESIDENT,
                            vec![
                                person_block(&[]),
                                ExtractionStrategy::labeled_paragraph(VICE_PRESIDENT),
                                ExtractionStrategy::free_text_scan(&[]),
                            ],
                        ),
                        legal_address(),
                        FieldSpec::new(
                            "Phone",
                            PHONE,
                            vec![ExtractionStrategy::phone_numbers(&[FAX])],
                        ),
                        FieldSpec::new(
                            "Email",
                            EMAIL,
                            vec![
                                ExtractionStrategy::labeled_paragraph(EMAIL),
                                ExtractionStrategy::free_text_scan(&[]),
                            ],
                        ),
                    ],
                },
                SectionSpec {
                    title: "International federation".to_string(),
                    locator: SectionLocator {
                        id: Some("section-world_description".to_string()),
                        phrase: "Международная федерация".to_string(),
                    },
                    fields: vec![
                        website(),
                        president(),
                        legal_address(),
                        FieldSpec::new(
                            "Phone",
                            PHONE_SHORT,
                            vec![ExtractionStrategy::phone_numbers(&[FAX])],
                        ),
                        FieldSpec::new(
                            "Fax",
                            FAX,
                            vec![
                                ExtractionStrategy::labeled_phone_numbers(&[FAX]),
                                ExtractionStrategy::labeled_paragraph(FAX),
                            ],
                        ),
                    ],
                },
            ],
            medals: true,
        }
    }

    /// Total number of fields over all sections; every record built from
    /// this schema has exactly this many entries.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// `<section>: <field>` for every field, in schema order.
    pub fn column_names(&self, locale: Locale) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| {
                let title = display_name(&section.title, locale);
                section.fields.iter().map(move |field| {
                    format!("{}: {}", title, display_name(&field.name, locale))
                })
            })
            .collect()
    }
}

fn person_block(exclude: &[&str]) -> ExtractionStrategy {
    ExtractionStrategy::tag_and_class(
        PERSON_BLOCK_TAG,
        PERSON_BLOCK_CLASS,
        PERSON_NAME_CLASS,
        PERSON_ROLE_CLASS,
        exclude,
    )
}

fn website() -> FieldSpec {
    FieldSpec::new("Website", "Сайт", vec![ExtractionStrategy::ByFirstLink]).without_postprocess()
}

fn president() -> FieldSpec {
    FieldSpec::new(
        "President",
        PRESIDENT,
        vec![
            person_block(&[VICE_PRESIDENT]),
            ExtractionStrategy::labeled_paragraph(PRESIDENT),
            ExtractionStrategy::free_text_scan(&[VICE_PRESIDENT]),
        ],
    )
}

fn legal_address() -> FieldSpec {
    FieldSpec::new(
        "Legal address",
        LEGAL_ADDRESS,
        vec![
            ExtractionStrategy::labeled_paragraph(LEGAL_ADDRESS),
            ExtractionStrategy::free_text_scan(&[]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federation_schema_columns() {
        let schema = Schema::federation();
        assert_eq!(schema.field_count(), 11);
        let columns = schema.column_names(Locale::En);
        assert_eq!(columns.len(), 11);
        assert_eq!(columns[0], "Kazakhstan federation: Website");
        assert_eq!(columns[2], "Kazakhstan federation: Vice-president");
        assert_eq!(columns[10], "International federation: Fax");
        assert!(schema.medals);
    }

    #[test]
    fn test_russian_column_names() {
        let columns = Schema::federation().column_names(Locale::Ru);
        assert_eq!(columns[1], "Казахстанская федерация: Президент");
        assert_eq!(columns[5], "Казахстанская федерация: E-mail");
        assert_eq!(columns[10], "Международная федерация: Факс");
    }

    #[test]
    fn test_every_schema_name_has_a_translation() {
        let schema = Schema::federation();
        for section in &schema.sections {
            assert_ne!(display_name(&section.title, Locale::Ru), section.title);
            for field in &section.fields {
                assert_ne!(display_name(&field.name, Locale::Ru), field.name);
            }
        }
        assert_eq!(display_name("Unlisted", Locale::Ru), "Unlisted");
    }
}
