/// Canned first-aid questions offered to the user, as bundled with the
/// original assistant. Selecting one only fills the draft; it never submits.
pub struct ExampleQuestion {
    pub label: &'static str,
    pub question: &'static str,
}

pub static EXAMPLES: [ExampleQuestion; 6] = [
    ExampleQuestion {
        label: "Quemaduras",
        question: "¿Qué debo hacer si alguien tiene una quemadura?",
    },
    ExampleQuestion {
        label: "RCP",
        question: "¿Cómo realizar RCP en un adulto?",
    },
    ExampleQuestion {
        label: "Ahogos",
        question: "¿Cuántos soplos de respiración de salvamento se deben dar a una víctima de ahogos?",
    },
    ExampleQuestion {
        label: "Heridas",
        question: "¿Cómo tratar una herida sangrante?",
    },
    ExampleQuestion {
        label: "Fracturas",
        question: "¿Qué hacer ante una sospecha de fractura?",
    },
    ExampleQuestion {
        label: "Shock",
        question: "¿Cuáles son los signos de shock y cómo tratarlo?",
    },
];

/// Resolve a selector as typed after `/example`: a 1-based index or a label
/// (case-insensitive).
pub fn find(selector: &str) -> Option<&'static ExampleQuestion> {
    if let Ok(index) = selector.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| EXAMPLES.get(i));
    }
    EXAMPLES
        .iter()
        .find(|example| example.label.eq_ignore_ascii_case(selector))
}
