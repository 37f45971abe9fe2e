//! CLI hold'em example: hot-seat play for several players at one terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use holdem::{Action, Card, Suit, Table, TableOptions, TableState};

fn main() {
    println!("Hold'em CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    loop {
        let name = prompt_line("Player name (empty to deal): ");
        if name == "q" || name == "quit" {
            return;
        }
        if name.is_empty() {
            if table.players().len() >= holdem::MIN_PLAYERS {
                break;
            }
            println!("At least {} players are needed.", holdem::MIN_PLAYERS);
            continue;
        }
        let id = format!("p{}", table.players().len() + 1);
        if let Err(err) = table.add_player(id, name) {
            println!("Join error: {err}");
        }
    }

    loop {
        if let Err(err) = table.start() {
            println!("Start error: {err}");
            break;
        }

        while table.state().is_betting() {
            print_table(&table);

            let Some(current) = table.current_player() else {
                break;
            };
            let id = current.id().to_string();
            println!("{} to act: [f]old [c]all [k]check [r <amount>]raise", current.name());

            let input = prompt_line("Action: ");
            let action = match input.split_whitespace().collect::<Vec<_>>().as_slice() {
                ["f" | "fold"] => Action::Fold,
                ["c" | "call"] => Action::Call,
                ["k" | "check"] => Action::Check,
                ["r" | "raise", amount] => match amount.parse() {
                    Ok(amount) => Action::Raise { amount },
                    Err(_) => {
                        println!("Please enter a number.");
                        continue;
                    }
                },
                ["q" | "quit"] => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = table.act(&id, action) {
                println!("{}", colorize(&err.to_string(), "31"));
            }
        }

        print_result(&table);

        if prompt_line("Deal again? (y/n): ") != "y" {
            break;
        }
        if let Err(err) = table.reset_hand() {
            println!("Reset error: {err}");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table) {
    println!("\n{} | pot {}", table.state(), table.pot());
    println!("Board: {}", format_cards(table.community_cards()));

    let current = table.current_player().map(|p| p.id().to_string());
    for player in table.players() {
        let marker = if current.as_deref() == Some(player.id()) {
            "*"
        } else {
            " "
        };
        let status = if player.is_active() { "" } else { " (folded)" };
        println!(
            "{} {:<12} cash {:>5} | bet {:>4} | {}{}",
            marker,
            player.name(),
            player.cash(),
            table.ledger().entry(player.id()),
            format_cards(player.cards()),
            status
        );
    }
    println!();
}

fn print_result(table: &Table) {
    if table.state() != TableState::Ended {
        return;
    }
    println!("\nBoard: {}", format_cards(table.community_cards()));
    let Some(result) = table.result() else {
        return;
    };
    for payout in &result.payouts {
        let name = table
            .player(&payout.player_id)
            .map_or(payout.player_id.as_str(), |p| p.name());
        match payout.category {
            Some(category) => println!(
                "{name} wins {} with {category}: {}",
                payout.amount,
                format_cards(&payout.hand)
            ),
            None => println!("{name} wins {} uncontested", payout.amount),
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
