//! The `arboquiz play` command: an interactive quiz loop on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arboquiz_core::engine::{QuizEngine, Submission, MAX_ATTEMPTS};
use arboquiz_core::error::QuizError;

pub fn execute(
    catalog_path: Option<PathBuf>,
    difficulty: String,
    questions: u32,
    seed: Option<u64>,
) -> Result<()> {
    anyhow::ensure!(questions >= 1, "il faut au moins une question");

    let catalog = super::load_catalog(catalog_path.as_deref())?;
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut engine = QuizEngine::with_rng(catalog, rng);
    engine.set_difficulty(&difficulty)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Quiz de Taxonomie des Arbres (niveau {})",
        engine.difficulty()
    );
    println!("Tapez votre réponse puis Entrée. ({MAX_ATTEMPTS} essais par question)\n");

    'questions: for number in 1..=questions {
        let question = engine.new_question();

        println!("Question {number}/{questions}");
        println!("{}", question.prompt);
        for hint in &question.hints {
            println!("  {hint}");
        }
        println!("  [image : {}]", question.image_path);

        loop {
            let mut submission = Submission::new();
            for kind in engine.expected_fields() {
                print!("Votre réponse ({}) : ", kind.label());
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    println!("\nFin de la session.");
                    break 'questions;
                };
                submission.insert(kind, line?);
            }

            match engine.check_answer(&submission) {
                Ok(feedback) => {
                    for (kind, result) in &feedback.per_field {
                        if result.correct {
                            println!("  ✨ {} : bonne réponse !", kind.label());
                        } else if result.revealed {
                            println!(
                                "  ❌ {} : la réponse était « {} »",
                                kind.label(),
                                result.ground_truth
                            );
                        } else {
                            println!("  ❌ {} : incorrect", kind.label());
                        }
                    }
                    println!("  Score: {}\n", feedback.score_summary);
                    if feedback.all_correct || feedback.reveal_answers {
                        continue 'questions;
                    }
                    println!("  Il vous reste {} essai(s).", feedback.attempts_left);
                }
                Err(QuizError::EmptySubmission) => {
                    println!("  Veuillez entrer une réponse avant de valider.");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    print_final_score(&engine);
    Ok(())
}

fn print_final_score<R: Rng>(engine: &QuizEngine<R>) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Bonnes réponses", "Questions", "Score"]);
    table.add_row(vec![
        Cell::new(engine.correct_count()),
        Cell::new(engine.total_count()),
        Cell::new(engine.score_summary()),
    ]);

    println!("\n{table}");
}
