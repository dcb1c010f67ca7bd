use std::fmt::Write;

use anyhow::Result;

use folio_core::content::{Portfolio, PORTFOLIO};

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&PORTFOLIO)?);
    } else {
        print!("{}", render_text(&PORTFOLIO));
    }
    Ok(())
}

/// Plain text rendition for pipes and non-interactive terminals
pub fn render_text(portfolio: &Portfolio) -> String {
    let profile = portfolio.profile;
    let mut out = String::new();

    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", profile.headline);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", profile.summary);

    heading(&mut out, profile.about_heading);
    for card in profile.about {
        let _ = writeln!(out, "* {}: {}", card.title, card.body);
    }

    heading(&mut out, "Experience");
    for entry in portfolio.experience {
        let _ = writeln!(out, "* {} at {} ({})", entry.title, entry.organization, entry.period);
        let _ = writeln!(out, "  {}", entry.description);
    }

    heading(&mut out, "Skills");
    for category in portfolio.skill_categories {
        let _ = writeln!(out, "* {}: {}", category.name, category.skills.join(", "));
    }

    heading(&mut out, "Projects");
    for project in portfolio.projects {
        let _ = writeln!(out, "* {} [{}]", project.title, project.tech.join(", "));
        let _ = writeln!(out, "  {}", project.description);
        let _ = writeln!(out, "  demo: {}", project.demo_url);
        let _ = writeln!(out, "  code: {}", project.repo_url);
    }

    heading(&mut out, "Contact");
    for info in portfolio.contact {
        let _ = writeln!(out, "* {}: {}", info.label, info.value);
    }

    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_covers_sections() {
        let text = render_text(&PORTFOLIO);
        assert!(text.starts_with("Ashman Malik\n"));
        for title in ["Experience", "Skills", "Projects", "Contact"] {
            assert!(text.contains(&format!("\n{}\n", title)), "missing {}", title);
        }
        for project in PORTFOLIO.projects {
            assert!(text.contains(project.demo_url));
        }
    }

    #[test]
    fn test_json_lists_projects() {
        let value = serde_json::to_value(&PORTFOLIO).unwrap();
        assert_eq!(value["projects"].as_array().unwrap().len(), PORTFOLIO.projects.len());
    }
}
