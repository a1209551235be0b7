mod commands;
mod questions;
mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use ask_flow::{
    AskRunner, DEFAULT_BASE_URL, HttpAskClient, PromptStrategy, SessionController,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::commands::Command;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; RUST_LOG overrides the quiet default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medical_assistant_cli=warn,ask_flow=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let session_id = Uuid::new_v4();
    info!(%session_id, %base_url, "terminal session starting");

    let runner = AskRunner::new(Arc::new(HttpAskClient::new(base_url)));
    let mut controller = SessionController::new();

    render::print_banner();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("pregunta> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match commands::parse(&line?) {
            Command::Ask(text) => {
                controller.update_question_text(text);
                submit(&runner, &mut controller).await;
            }
            Command::Send => {
                if controller.query().is_submittable() {
                    submit(&runner, &mut controller).await;
                } else {
                    println!("No hay pregunta preparada. Escribe una o usa /example.");
                }
            }
            Command::Strategy(None) => render::print_strategies(controller.query().strategy),
            Command::Strategy(Some(name)) => match PromptStrategy::parse(&name) {
                Some(strategy) => {
                    controller.select_prompt_strategy(strategy);
                    println!("Estrategia seleccionada: {}", strategy.label());
                }
                None => {
                    println!("Estrategia desconocida: {name}");
                    render::print_strategies(controller.query().strategy);
                }
            },
            Command::Memory(flag) => {
                controller.toggle_memory(flag);
                println!(
                    "Memoria conversacional {}",
                    if flag { "activada" } else { "desactivada" }
                );
            }
            Command::ListExamples => render::print_examples(),
            Command::Example(selector) => match questions::find(&selector) {
                Some(example) => {
                    controller.apply_example(example.question);
                    println!("Pregunta preparada: {}", example.question);
                    println!("Usa /send para enviarla.");
                }
                None => println!("No hay ejemplo \"{selector}\". /examples los lista."),
            },
            Command::Help => render::print_help(),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(input) => {
                println!("Comando no reconocido: {input}");
                render::print_help();
            }
        }
    }

    info!(%session_id, "terminal session finished");
    Ok(())
}

/// One submission round: the draft is already in place, so show the loading
/// line, run it to its terminal state, and render the outcome.
async fn submit(runner: &AskRunner, controller: &mut SessionController) {
    println!("Procesando...");
    let state = runner.run(controller).await;
    render::print_state(state);
}
