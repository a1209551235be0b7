//! Terminal rendering of the session: answer, sources, failures, and the
//! help/listing output. All strings mirror the original page's sections.

use ask_flow::{Answer, PromptStrategy, SessionState, page_range, source_label};

use crate::questions::EXAMPLES;

pub fn print_banner() {
    println!("Asistente Médico RAG");
    println!("Consulta información médica basada en guías de MSF y Cruz Roja");
    println!("Escribe tu pregunta y pulsa Enter. /help muestra los comandos.");
    println!();
}

/// Render the state a submission round ended in. `Idle` and `Loading` render
/// nothing: the first has nothing to show and the second is only observable
/// while the request is still pending.
pub fn print_state(state: &SessionState) {
    match state {
        SessionState::Succeeded(answer) => print_answer(answer),
        SessionState::Failed(message) => println!("Error: {message}"),
        SessionState::Idle | SessionState::Loading => {}
    }
}

fn print_answer(answer: &Answer) {
    println!();
    println!("Respuesta");
    for line in answer.text.lines() {
        println!("  {line}");
    }

    if !answer.sources.is_empty() {
        println!();
        println!("Fuentes y Contexto");
        for source in &answer.sources {
            match page_range(source) {
                Some(pages) => println!(
                    "  - {} (Páginas: {})",
                    source_label(&source.document),
                    pages
                ),
                None => println!("  - {}", source_label(&source.document)),
            }
        }
    }
    println!();
}

pub fn print_strategies(current: PromptStrategy) {
    println!("Tipo de Prompt Engineering:");
    for strategy in PromptStrategy::ALL {
        let marker = if strategy == current { "*" } else { " " };
        println!("  {marker} {:<20} {}", strategy.as_str(), strategy.label());
    }
}

pub fn print_examples() {
    println!("Ejemplos de Consultas:");
    for (index, example) in EXAMPLES.iter().enumerate() {
        println!("  {}. {:<12} {}", index + 1, example.label, example.question);
    }
    println!("Usa /example <número o etiqueta> para preparar una.");
}

pub fn print_help() {
    println!("Comandos:");
    println!("  <texto>              pregunta y envía");
    println!("  /send                envía la pregunta preparada");
    println!("  /strategy [nombre]   muestra o selecciona la estrategia de prompt");
    println!("  /memory on|off       activa o desactiva la memoria conversacional");
    println!("  /examples            lista las preguntas de ejemplo");
    println!("  /example <n|nombre>  prepara una pregunta de ejemplo (sin enviar)");
    println!("  /quit                termina la sesión");
}
