//! Plain-text stat block and summary table rendering.

use std::fmt::Write as _;

use comfy_table::{Cell, Table};

use rollforge_core::engine::CharacterSheet;
use rollforge_core::model::Ability;

/// Render the classic six-column stat block for one character.
///
/// Layout: ability header row, score row, modifier row, then the derived
/// combat lines separated by rules.
pub fn render_stat_block(sheet: &CharacterSheet) -> String {
    let mut out = String::new();

    let header = Ability::ALL
        .iter()
        .map(|a| a.tag().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let scores = Ability::ALL
        .iter()
        .map(|&a| format!("{:3}", sheet.abilities.score(a)))
        .collect::<Vec<_>>()
        .join(" ");
    let mods = Ability::ALL
        .iter()
        .map(|&a| format!("{:+3}", sheet.abilities.modifier(a)))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{scores}");
    let _ = writeln!(out, "{mods}");
    let _ = writeln!(out, "{}", "-".repeat(25));
    let _ = writeln!(out, "Attack:   {:+4}", sheet.attack_bonus);
    let _ = writeln!(out, "Touch AC: {:4}", sheet.touch_ac);
    let _ = writeln!(out, "HP:       {:4}", sheet.hit_points);
    let _ = writeln!(out, "{}", "-".repeat(25));
    let _ = writeln!(out, "Fortitude:{:+4}", sheet.fortitude);
    let _ = writeln!(out, "Reflex:   {:+4}", sheet.reflex);
    let _ = writeln!(out, "Willpower:{:+4}", sheet.will);
    let _ = writeln!(out, "{}", "-".repeat(25));
    let _ = writeln!(
        out,
        "Class skills: {:+} (Cross-class: +0) + stat bonus",
        sheet.class_skill_bonus
    );

    out
}

/// Build a summary table across several generated characters.
pub fn summary_table(sheets: &[CharacterSheet]) -> Table {
    let mut table = Table::new();
    let mut header = vec!["#".to_string(), "Level".to_string()];
    header.extend(Ability::ALL.iter().map(|a| a.tag().to_uppercase()));
    header.extend(
        ["Attack", "Touch AC", "HP", "Fort", "Ref", "Will"]
            .iter()
            .map(|s| s.to_string()),
    );
    table.set_header(header);

    for (i, sheet) in sheets.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1), Cell::new(sheet.level)];
        row.extend(
            Ability::ALL
                .iter()
                .map(|&a| Cell::new(sheet.abilities.score(a))),
        );
        row.push(Cell::new(format!("{:+}", sheet.attack_bonus)));
        row.push(Cell::new(sheet.touch_ac));
        row.push(Cell::new(sheet.hit_points));
        row.push(Cell::new(format!("{:+}", sheet.fortitude)));
        row.push(Cell::new(format!("{:+}", sheet.reflex)));
        row.push(Cell::new(format!("{:+}", sheet.will)));
        table.add_row(row);
    }

    table
}
