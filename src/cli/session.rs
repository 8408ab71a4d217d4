// ============================================================
// Layer 1 — Interactive Sessions
// ============================================================
// The read–handle–render loops behind `search` and `quiz`.
//
// Both loops are generic over BufRead / Write so the same
// code serves stdin/stdout, scripted answers, and tests.
//
// Search: every input line is one request. The response is
// rendered from scratch; nothing carries over between lines
// except the cached table.
//
// Quiz: one prompt per question. Once every question has been
// asked, any question can be answered again by number until
// `:results` (or EOF) shows the score. How a re-check moves the
// score is up to the TallyPolicy. EOF during the first pass
// skips straight to the results for whatever was checked.
//
// Input lines are decoded lossily: a line that is not valid
// UTF-8 is treated like any other unmatched text and never
// ends the session.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::application::{
    quiz_use_case::{QuizResults, QuizUseCase},
    search_use_case::SearchUseCase,
};
use crate::cli::render::Renderer;
use crate::domain::traits::TableSource;

/// Run the interactive search screen until EOF or `:quit`.
pub fn search_loop<S, R, W>(
    use_case: &SearchUseCase<S>,
    renderer: &Renderer,
    mut input: R,
    out:      &mut W,
) -> Result<()>
where
    S: TableSource,
    R: BufRead,
    W: Write,
{
    renderer.title(out)?;
    renderer.load_status(out, &use_case.status())?;
    renderer.search_prompt(out)?;
    prompt(out)?;

    while let Some(line) = read_line_lossy(&mut input)? {
        match line.trim() {
            ":quit" | ":q"  => break,
            ":sample"       => renderer.preview(out, &use_case.preview())?,
            ":help"         => renderer.guide(out)?,
            query           => renderer.response(out, &use_case.handle(query))?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Ask every question, then let the player re-answer any of
/// them until `:results` or EOF, then show the score.
pub fn quiz_loop<R, W>(
    quiz:     &mut QuizUseCase,
    renderer: &Renderer,
    mut input: R,
    out:      &mut W,
) -> Result<QuizResults>
where
    R: BufRead,
    W: Write,
{
    renderer.quiz_title(out)?;

    let mut finished = true;
    for index in 0..quiz.len() {
        if !ask(quiz, renderer, &mut input, out, index)? {
            finished = false;
            break;
        }
    }

    // Review: re-answer by question number
    while finished {
        renderer.review_prompt(out, quiz.len())?;
        let Some(line) = read_line_lossy(&mut input)? else {
            writeln!(out)?;
            break;
        };

        match line.trim() {
            ":results" | ":r" => break,
            entry => match parse_question(entry, quiz.len()) {
                Some(index) => finished = ask(quiz, renderer, &mut input, out, index)?,
                None        => renderer.invalid_review(out, quiz.len())?,
            },
        }
    }

    let results = quiz.results();
    tracing::info!("Quiz finished: {}/{}", results.score, results.total);
    renderer.results(out, &results)?;
    Ok(results)
}

/// Prompt for question `index` until a valid choice arrives,
/// then check it. Returns `false` if input ran out first.
fn ask<R, W>(
    quiz:     &mut QuizUseCase,
    renderer: &Renderer,
    input:    &mut R,
    out:      &mut W,
    index:    usize,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let question = quiz.questions()[index].clone();
    renderer.question(out, index + 1, &question)?;

    let choice = loop {
        let Some(line) = read_line_lossy(input)? else {
            writeln!(out)?;
            return Ok(false);
        };
        match parse_choice(&line, question.options()) {
            Some(choice) => break choice,
            None => {
                renderer.invalid_choice(out, question.options().len())?;
                renderer.question(out, index + 1, &question)?;
            }
        }
    };

    writeln!(out)?;
    let outcome = quiz.check(index, choice)?;
    renderer.check_outcome(out, &outcome)?;
    Ok(true)
}

/// One line including its terminator, or `None` at EOF.
/// Bytes that are not UTF-8 become U+FFFD.
fn read_line_lossy(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// A 1-based question number, as a 0-based index.
fn parse_question(entry: &str, total: usize) -> Option<usize> {
    entry
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=total).contains(n))
        .map(|n| n - 1)
}

/// Accept a 1-based option number or the option text itself.
fn parse_choice<'a>(line: &str, options: &'a [String]) -> Option<&'a str> {
    let line = line.trim();

    if let Ok(n) = line.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(String::as_str);
    }

    options.iter().find(|o| o.as_str() == line).map(String::as_str)
}
