use colored::Colorize;
use propmap::api::ClassificationOutcome;
use propmap::enums::DomainSummary;
use propmap::error::Result;
use propmap::model::GenericClassification;
use propmap::registry::MapperRegistry;
use serde::Serialize;

const NAME_WIDTH: usize = 18;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_types(registry: &MapperRegistry) {
    if registry.is_empty() {
        println!("{}", "No classification types registered.".dimmed());
        return;
    }
    for type_name in registry.type_names() {
        let owned = registry
            .resolve(type_name)
            .map(|mapper| mapper.owned_attributes())
            .unwrap_or_default();
        let owned = if owned.is_empty() {
            "(no attributes)".to_string()
        } else {
            owned.join(", ")
        };
        let name = format!("{:<width$}", type_name, width = NAME_WIDTH);
        println!("{} {}", name.bold(), owned.dimmed());
    }
}

pub fn print_domains(domains: &[DomainSummary]) {
    for (i, domain) in domains.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", domain.name.bold());
        for entry in &domain.values {
            let ordinal = format!("{:>3}", entry.ordinal);
            println!(
                "  {}  {:<20} {}",
                ordinal.yellow(),
                entry.symbolic_name,
                entry.description.dimmed()
            );
        }
    }
}

pub fn print_outcomes(outcomes: &[ClassificationOutcome]) -> Result<()> {
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match outcome {
            ClassificationOutcome::Decoded {
                decoded,
                unrecognized,
            } => {
                println!("{}", decoded.classification.type_name().green().bold());
                println!("{}", to_json(&decoded.classification)?);
                if !unrecognized.is_empty() {
                    let names: Vec<_> = unrecognized.names().collect();
                    println!("{} {}", "unrecognized:".yellow(), names.join(", "));
                }
            }
            ClassificationOutcome::Unrecognized(generic) => {
                println!(
                    "{} {}",
                    generic.type_name.yellow().bold(),
                    "(no mapper registered, passed through)".dimmed()
                );
            }
        }
    }
    Ok(())
}

pub fn print_generic(generic: &GenericClassification) -> Result<()> {
    println!("{}", to_json(generic)?);
    Ok(())
}
