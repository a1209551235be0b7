use async_trait::async_trait;
use ask_flow::{
    Answer, AskClient, AskRequest, AskRunner, PromptStrategy, SessionController, SessionState,
    Source, page_range, source_label,
};
use std::sync::Arc;

// A stand-in for the remote answering service so the demo runs without a
// backend. Swap it for HttpAskClient::new("http://localhost:8000") to talk
// to a real one.
struct CannedService;

#[async_trait]
impl AskClient for CannedService {
    async fn ask(&self, request: AskRequest) -> ask_flow::Result<Answer> {
        println!(
            "  (service received: {:?} with prompt_type={})",
            request.question,
            request.prompt_type.as_str()
        );
        Ok(Answer {
            text: "Enfríe la quemadura con agua corriente durante 10-20 minutos.\nNo aplique hielo directamente.".to_string(),
            sources: vec![Source {
                document: "first_aid_guide.pdf".to_string(),
                page_start: Some(12),
                page_end: Some(14),
            }],
            conversation_id: Some("demo-conversation".to_string()),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runner = AskRunner::new(Arc::new(CannedService));
    let mut controller = SessionController::new();

    println!("Starting query session demo\n");

    // Compose the query the way a front end would: field by field.
    controller.update_question_text("¿Qué debo hacer si alguien tiene una quemadura?");
    controller.select_prompt_strategy(PromptStrategy::ChainOfThought);
    controller.toggle_memory(true);

    println!("Draft: {}", controller.query().text);
    println!("Strategy: {}\n", controller.query().strategy.label());

    // One full round: submit -> ask -> complete.
    let state = runner.run(&mut controller).await;

    match state {
        SessionState::Succeeded(answer) => {
            println!("\nAnswer:");
            for line in answer.text.lines() {
                println!("  {line}");
            }
            println!("\nSources:");
            for source in &answer.sources {
                println!(
                    "  - {} (pages {})",
                    source_label(&source.document),
                    page_range(source).unwrap_or_default()
                );
            }
        }
        SessionState::Failed(message) => println!("Failed: {message}"),
        _ => unreachable!("a submission round always ends in a terminal state"),
    }

    println!(
        "\nConversation id for the next turn: {:?}",
        controller.conversation_id()
    );
    println!("\nDemo finished");
    Ok(())
}
