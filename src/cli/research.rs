use principles::{InvalidPersonName, Person, Relationships};
use tracing::instrument;

use super::terminal::Style;

/// Command arguments for `dp research`.
#[derive(Debug, clap::Parser)]
pub struct Research {
    /// Whose children to look up
    #[arg(long, default_value = "John")]
    name: String,
}

impl Research {
    #[instrument(level = "debug")]
    pub fn run(self) -> anyhow::Result<()> {
        let relationships = sample_family()?;
        let lines = principles::Research::new(&relationships).children_of(&self.name);

        if lines.is_empty() {
            println!("{}", format!("{} has no recorded children", self.name).warning());
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

/// John, with two children: Chris and Mary.
fn sample_family() -> Result<Relationships, InvalidPersonName> {
    let john = Person::new("John")?;
    let chris = Person::new("Chris")?;
    let mary = Person::new("Mary")?;

    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&john, &chris);
    relationships.add_parent_and_child(&john, &mary);
    relationships.add_siblings(&chris, &mary);
    Ok(relationships)
}

#[cfg(test)]
mod tests {
    use principles::RelationshipBrowser;

    use super::*;

    #[test]
    fn sample_family_has_two_children() {
        let relationships = sample_family().unwrap();
        let names: Vec<_> = relationships
            .find_all_children_of("John")
            .into_iter()
            .map(Person::name)
            .collect();
        assert_eq!(names, ["Chris", "Mary"]);
    }

    #[test]
    fn run_succeeds_for_known_and_unknown_names() {
        Research {
            name: "John".to_string(),
        }
        .run()
        .unwrap();
        Research {
            name: "Nobody".to_string(),
        }
        .run()
        .unwrap();
    }

    #[test]
    fn sample_family_records_siblings() {
        let relationships = sample_family().unwrap();
        assert_eq!(relationships.relations().count(), 6);
    }
}
