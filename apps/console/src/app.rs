//! Interactive console application.

use std::time::Duration;

use api_protocol::requests::SubmitUserRequest;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;
use tokio::time::Instant;
use uuid::Uuid;

use crate::api_client::ApiClient;
use crate::config::ConsoleConfig;
use crate::form::{FormFlow, FormMode, FormOutcome, FormResult, FormState};
use crate::mailer::Mailer;
use crate::roster::Roster;

/// How long the "notification sent" banner stays up.
const BANNER_DURATION: Duration = Duration::from_secs(3);

type InputLines = Lines<BufReader<Stdin>>;

/// The console application: record list, selection, forms, email.
pub struct App {
    client: ApiClient,
    mailer: Option<Mailer>,
    roster: Roster,
    banner_deadline: Option<Instant>,
}

impl App {
    /// Creates the application from configuration.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            client: ApiClient::new(&config.server_url),
            mailer: config.email.clone().map(Mailer::new),
            roster: Roster::default(),
            banner_deadline: None,
        }
    }

    /// Runs the application until the user quits or the process is
    /// interrupted.
    pub async fn run(mut self) -> anyhow::Result<()> {
        // The initial fetch races the interrupt signal; a response that
        // arrives after the user bailed out is discarded untouched.
        let users = tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Interrupted before initial load");
                return Ok(());
            }
            result = self.client.list_users() => result
                .map_err(|e| anyhow::anyhow!("could not load users: {}", e.user_message()))?,
        };
        self.roster = Roster::new(users);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.render();
        print_help();

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => break,
                _ = banner_expiry(self.banner_deadline), if self.banner_deadline.is_some() => {
                    self.banner_deadline = None;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(input) => {
                            if !self.handle_command(input.trim(), &mut lines).await? {
                                break;
                            }
                        }
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }

    /// Handles one command line. Returns false to quit.
    async fn handle_command(&mut self, input: &str, lines: &mut InputLines) -> anyhow::Result<bool> {
        match input {
            "" | "list" | "ls" => self.render(),
            "help" | "h" => print_help(),
            "quit" | "q" | "exit" => return Ok(false),
            "select all" => {
                self.roster.select_all();
                self.render();
            }
            "unselect all" => {
                self.roster.clear_selection();
                self.render();
            }
            "add" => {
                self.run_form(FormFlow::create(), lines).await?;
                self.render();
            }
            "send" => self.send_selected().await,
            _ => {
                if let Some(rest) = input.strip_prefix("select ") {
                    if let Some(id) = self.id_at(rest) {
                        self.roster.select(id);
                        self.render();
                    }
                } else if let Some(rest) = input.strip_prefix("unselect ") {
                    if let Some(id) = self.id_at(rest) {
                        self.roster.unselect(id);
                        self.render();
                    }
                } else if let Some(rest) = input.strip_prefix("edit ") {
                    if let Some(id) = self.id_at(rest) {
                        self.run_form(FormFlow::edit(id), lines).await?;
                        self.render();
                    }
                } else {
                    println!("Unknown command: {input} (try 'help')");
                }
            }
        }
        Ok(true)
    }

    /// Resolves a 1-based list position to a record ID.
    fn id_at(&self, arg: &str) -> Option<Uuid> {
        let position: usize = match arg.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Expected a list position, got: {arg}");
                return None;
            }
        };
        match self.roster.users().get(position.wrapping_sub(1)) {
            Some(user) => Some(user.id),
            None => {
                println!("No record at position {position}.");
                None
            }
        }
    }

    /// Runs one create/edit form session.
    async fn run_form(&mut self, mut form: FormFlow, lines: &mut InputLines) -> anyhow::Result<()> {
        if form.state() == FormState::Loading {
            println!("Loading...");
            if let Err(e) = form.load(&self.client).await {
                println!("Error: {}", e.user_message());
                return Ok(());
            }
        }

        // The form stays open on a failed submit, so prompt again until
        // the server accepts, the user deletes, or the user cancels.
        loop {
            let initial = form.initial().cloned();
            let Some(name) = prompt(lines, "Name", initial.as_ref().map(|u| u.name.as_str())).await?
            else {
                return Ok(());
            };
            let Some(phone_number) = prompt(
                lines,
                "Phone number",
                initial.as_ref().map(|u| u.phone_number.as_str()),
            )
            .await?
            else {
                return Ok(());
            };
            let Some(email) =
                prompt(lines, "Email", initial.as_ref().map(|u| u.email.as_str())).await?
            else {
                return Ok(());
            };
            let Some(hobbies) =
                prompt(lines, "Hobbies", initial.as_ref().map(|u| u.hobbies.as_str())).await?
            else {
                return Ok(());
            };

            let request = SubmitUserRequest {
                name,
                phone_number,
                email,
                hobbies,
            };

            let outcome = if matches!(form.mode(), FormMode::Edit(_)) {
                let Some(action) = prompt(lines, "[s]ave / [d]elete / [c]ancel", Some("s")).await?
                else {
                    return Ok(());
                };
                match action.as_str() {
                    "d" => form.delete(&self.client).await,
                    "c" => return Ok(()),
                    _ => form.submit(&self.client, request).await,
                }
            } else {
                form.submit(&self.client, request).await
            };

            match outcome {
                FormOutcome::Closed(FormResult::Created(user)) => {
                    println!("User created.");
                    self.roster.apply_created(user);
                    return Ok(());
                }
                FormOutcome::Closed(FormResult::Updated(user)) => {
                    println!("User updated.");
                    self.roster.apply_updated(user);
                    return Ok(());
                }
                FormOutcome::Closed(FormResult::Deleted(id)) => {
                    println!("User deleted.");
                    self.roster.apply_deleted(id);
                    return Ok(());
                }
                FormOutcome::Error(message) => {
                    println!("Error: {message}");
                }
            }
        }
    }

    /// Emails the selected subset and arms the success banner.
    async fn send_selected(&mut self) {
        if self.roster.selected().is_empty() {
            println!("No users selected.");
            return;
        }
        let Some(mailer) = &self.mailer else {
            println!("Email service is not configured.");
            return;
        };

        match mailer.send_selected_users(self.roster.selected()).await {
            Ok(()) => {
                // Re-sending before expiry supersedes the earlier deadline.
                self.banner_deadline = Some(Instant::now() + BANNER_DURATION);
                self.render();
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    /// Prints the record list, selection marks, and the banner.
    fn render(&self) {
        if self
            .banner_deadline
            .is_some_and(|deadline| deadline > Instant::now())
        {
            println!("*** Notification sent! ***");
        }

        if self.roster.users().is_empty() {
            println!("No users yet. Type 'add' to create one.");
            return;
        }

        for (index, user) in self.roster.users().iter().enumerate() {
            let mark = if self.roster.is_selected(user.id) { "x" } else { " " };
            println!(
                "[{mark}] {:>2}. {}  {}  {}  ({})",
                index + 1,
                user.name,
                user.phone_number,
                user.email,
                user.hobbies
            );
        }
    }
}

/// Resolves when the banner deadline passes; pends forever without one.
async fn banner_expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Prompts for one field. Empty input keeps the current value; `None`
/// means input was closed and the form is cancelled.
async fn prompt(
    lines: &mut InputLines,
    label: &str,
    current: Option<&str>,
) -> anyhow::Result<Option<String>> {
    match current {
        Some(current) => println!("{label} [{current}]:"),
        None => println!("{label}:"),
    }

    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };
    let line = line.trim().to_string();

    if line.is_empty() {
        if let Some(current) = current {
            return Ok(Some(current.to_string()));
        }
    }
    Ok(Some(line))
}

fn print_help() {
    println!("Commands:");
    println!("  list                 show all users");
    println!("  select <n> | all     select a user (or every user)");
    println!("  unselect <n> | all   unselect a user (or every user)");
    println!("  add                  create a user");
    println!("  edit <n>             edit or delete a user");
    println!("  send                 email the selected users");
    println!("  quit                 exit");
}
