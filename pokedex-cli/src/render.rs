use std::fmt::Write;

use pokedex_state::ui::{
    Card,
    Filters,
    Panel,
    View,
};

fn write_card(out: &mut String, card: &Card) {
    let button = if card.button.disabled() {
        format!("({})", card.button.label())
    } else {
        format!("[{}]", card.button.label())
    };
    writeln!(
        out,
        "  #{:<4} {:<16} {:<20} {button}",
        card.id,
        card.name,
        card.types.join(", "),
    )
    .ok();
    writeln!(out, "        {}", card.image).ok();
}

fn write_panel(out: &mut String, panel: &Panel) {
    writeln!(out, "{} ({})", panel.title, panel.cards.len()).ok();
    if panel.cards.is_empty() {
        writeln!(out, "  (empty)").ok();
    }
    for card in &panel.cards {
        write_card(out, card);
    }
}

fn write_filters(out: &mut String, filters: &Filters) {
    let name = if filters.name.is_empty() {
        "(any)"
    } else {
        filters.name.as_str()
    };
    writeln!(out, "Name: {name}").ok();
    let options = filters
        .type_options
        .iter()
        .map(|option| {
            if option.selected {
                format!("<{}>", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect::<Vec<_>>();
    writeln!(out, "Type: {}", options.join(" | ")).ok();
}

/// Renders the filters and both panels as text.
pub fn render_view(view: &View) -> String {
    let mut out = String::new();
    write_filters(&mut out, &view.filters);
    writeln!(out).ok();
    write_panel(&mut out, &view.pokedex);
    writeln!(out).ok();
    write_panel(&mut out, &view.captured);
    out
}

/// Renders a single panel as text.
pub fn render_panel(panel: &Panel) -> String {
    let mut out = String::new();
    write_panel(&mut out, panel);
    out
}

/// Renders the type options as text, one per line.
pub fn render_type_options(filters: &Filters) -> String {
    filters
        .type_options
        .iter()
        .filter(|option| !option.value.is_empty())
        .map(|option| format!("{}\n", option.value))
        .collect()
}
