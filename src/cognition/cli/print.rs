use cognition::api::{CmdMessage, MessageLevel};
use cognition::model::{CompactQuiz, Quiz, User};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 36;
const COUNT_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let available = LINE_WIDTH.saturating_sub(COUNT_WIDTH);
    for user in users {
        let name = truncate_to_width(user.username(), available);
        let padding = available.saturating_sub(name.width());
        let count = format!("{} quizzes", user.quiz_count());
        println!(
            "{}{}{}",
            name.bold(),
            " ".repeat(padding),
            format!("{:>width$}", count, width = COUNT_WIDTH).dimmed()
        );
    }
}

pub(super) fn print_quiz_titles(titles: &[CompactQuiz]) {
    if titles.is_empty() {
        println!("No quizzes found.");
        return;
    }

    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + 2);
    for title in titles {
        println!(
            "{}  {}",
            title.id().yellow(),
            truncate_to_width(title.name(), available)
        );
    }
}

pub(super) fn print_full_quizzes(quizzes: &[Quiz]) {
    for (i, quiz) in quizzes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", quiz.id().yellow(), quiz.name().bold());
        println!("{}", quiz.description());
        println!("--------------------------------");
        if quiz.flashcard_count() == 0 {
            println!("{}", "No flashcards yet.".dimmed());
            continue;
        }

        let front_width = quiz
            .flashcards_iter()
            .map(|card| card.front().width())
            .max()
            .unwrap_or(0)
            .min(LINE_WIDTH / 3);
        for card in quiz.flashcards_iter() {
            let front = truncate_to_width(card.front(), front_width);
            let padding = front_width.saturating_sub(front.width());
            println!(
                "{}  {}{}  {}",
                card.id().dimmed(),
                front,
                " ".repeat(padding),
                card.answer()
            );
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
