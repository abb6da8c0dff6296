use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use atlas::build_info;
use atlas::core::constants::{
    AUTOSAVE_INTERVAL_SECONDS, MESSAGE_LOG_CAPACITY, TICK_INTERVAL_MS,
};
use atlas::core::{ResultSink, Session};
use atlas::input::{atlas_input, menu_input, quiz_input};
use atlas::profile::{HistoryStore, MatchRecord, Profile, ProfileManager};
use atlas::profile::limits::today_string;
use atlas::ui::atlas_scene::AtlasScene;
use atlas::ui::menu_scene::{MenuAction, MenuScene};
use atlas::ui::profile_create::ProfileCreateScreen;
use atlas::ui::profile_select::ProfileSelectScreen;
use atlas::ui::quiz_scene::{QuizAction, QuizScene};
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

enum Screen {
    ProfileSelect,
    ProfileCreate,
}

/// What the home screen is currently showing.
enum HomeView {
    Menu,
    Atlas,
    Playing,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "atlas {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Atlas - Terminal Geography Trivia\n");
                println!("Usage: atlas [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'atlas --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let profile_manager = ProfileManager::new()?;
    let history = HistoryStore::new()?;

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &profile_manager, &history);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    profile_manager: &ProfileManager,
    history: &HistoryStore,
) -> io::Result<()> {
    let mut current_screen = Screen::ProfileSelect;
    let mut select_screen = ProfileSelectScreen::new();
    let mut create_screen = ProfileCreateScreen::new();

    loop {
        match current_screen {
            Screen::ProfileSelect => {
                let profiles = profile_manager.list_profiles()?;

                if profiles.is_empty() {
                    current_screen = Screen::ProfileCreate;
                    continue;
                }
                if select_screen.selected_index >= profiles.len() {
                    select_screen.selected_index = profiles.len().saturating_sub(1);
                }

                terminal.draw(|f| {
                    select_screen.draw(f, f.size(), &profiles);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        let pending = select_screen.pending_delete.take();
                        match key_event.code {
                            KeyCode::Char('d') | KeyCode::Char('D') => {
                                let selected = &profiles[select_screen.selected_index];
                                match pending {
                                    Some(filename) if filename == selected.filename => {
                                        profile_manager.delete_profile(&filename)?;
                                        select_screen.selected_index = 0;
                                    }
                                    _ => {
                                        select_screen.pending_delete =
                                            Some(selected.filename.clone());
                                    }
                                }
                            }
                            KeyCode::Up => {
                                select_screen.selected_index =
                                    select_screen.selected_index.saturating_sub(1);
                            }
                            KeyCode::Down => {
                                if select_screen.selected_index + 1 < profiles.len() {
                                    select_screen.selected_index += 1;
                                }
                            }
                            KeyCode::Enter => {
                                let selected = &profiles[select_screen.selected_index];
                                if !selected.is_corrupted {
                                    match profile_manager.load_profile(&selected.filename) {
                                        Ok(profile) => {
                                            run_home(terminal, profile_manager, history, profile)?;
                                        }
                                        Err(e) => {
                                            eprintln!("Failed to load profile: {}", e);
                                        }
                                    }
                                }
                            }
                            KeyCode::Char('n') | KeyCode::Char('N') => {
                                create_screen = ProfileCreateScreen::new();
                                current_screen = Screen::ProfileCreate;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::ProfileCreate => {
                terminal.draw(|f| {
                    create_screen.draw(f, f.size());
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Char(c) => {
                                create_screen.handle_char_input(c);
                            }
                            KeyCode::Backspace => {
                                create_screen.handle_backspace();
                            }
                            KeyCode::Enter => {
                                if create_screen.is_valid() {
                                    let profile = Profile::new(
                                        create_screen.get_name(),
                                        Utc::now().timestamp(),
                                    );
                                    if let Err(e) = profile_manager.save_profile(&profile) {
                                        create_screen.validation_error =
                                            Some(format!("Save failed: {}", e));
                                    } else {
                                        create_screen = ProfileCreateScreen::new();
                                        select_screen = ProfileSelectScreen::new();
                                        current_screen = Screen::ProfileSelect;
                                    }
                                }
                            }
                            KeyCode::Esc => {
                                let profiles = profile_manager.list_profiles()?;
                                if !profiles.is_empty() {
                                    create_screen = ProfileCreateScreen::new();
                                    current_screen = Screen::ProfileSelect;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

        }
    }
}

/// The home loop: menu, atlas browser, and active game sessions.
/// Returns when the player backs out to the profile select screen.
fn run_home(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    profile_manager: &ProfileManager,
    history: &HistoryStore,
    mut profile: Profile,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut view = HomeView::Menu;
    let mut menu_scene = MenuScene::new();
    let mut atlas_scene = AtlasScene::new();
    let mut quiz_scene = QuizScene::new();
    let mut session: Option<Session> = None;
    let mut messages: VecDeque<String> = VecDeque::new();

    let mut last_tick = Instant::now();
    let mut last_autosave = Instant::now();

    if let Ok(records) = history.recent(3) {
        for record in records.into_iter().rev() {
            push_message(
                &mut messages,
                format!("Recent: {} scored {}", record.game_id, record.score),
            );
        }
    }
    push_message(&mut messages, format!("Welcome back, {}.", profile.name));

    loop {
        let today = today_string();

        match view {
            HomeView::Menu => {
                terminal.draw(|f| {
                    menu_scene.draw(f, f.size(), &profile, &today, &messages);
                })?;
            }
            HomeView::Atlas => {
                terminal.draw(|f| {
                    atlas_scene.draw(f, f.size());
                })?;
            }
            HomeView::Playing => {
                if let Some(active) = session.as_ref() {
                    let best = profile.stats.best_for(active.kind().id());
                    terminal.draw(|f| {
                        quiz_scene.draw(f, f.size(), active, best);
                    })?;
                }
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match view {
                    HomeView::Menu => {
                        match menu_scene.handle(menu_input(key_event.code)) {
                            Some(MenuAction::Start(kind)) => {
                                if profile.gate.is_eligible(profile.premium, &today) {
                                    profile.gate.record_play(&today);
                                    save_profile(profile_manager, &mut profile, &mut messages);

                                    let mut fresh = Session::new(kind);
                                    fresh.start(&mut rng);
                                    session = Some(fresh);
                                    quiz_scene = QuizScene::new();
                                    view = HomeView::Playing;
                                } else {
                                    push_message(
                                        &mut messages,
                                        "Out of free games for today - premium plays without limits.".to_string(),
                                    );
                                }
                            }
                            Some(MenuAction::OpenAtlas) => {
                                view = HomeView::Atlas;
                            }
                            Some(MenuAction::TogglePremium) => {
                                profile.premium = !profile.premium;
                                let notice = if profile.premium {
                                    "Premium enabled for this profile."
                                } else {
                                    "Back on the free tier."
                                };
                                push_message(&mut messages, notice.to_string());
                                save_profile(profile_manager, &mut profile, &mut messages);
                            }
                            Some(MenuAction::Back) => {
                                save_profile(profile_manager, &mut profile, &mut messages);
                                return Ok(());
                            }
                            None => {}
                        }
                    }
                    HomeView::Atlas => {
                        let viewport = terminal.size()?.height.saturating_sub(4) as usize;
                        if !atlas_scene.handle(atlas_input(key_event.code), viewport) {
                            view = HomeView::Menu;
                        }
                    }
                    HomeView::Playing => {
                        if let Some(active) = session.as_mut() {
                            match quiz_scene.handle(quiz_input(key_event.code), active) {
                                QuizAction::Leave => {
                                    // Dropping the session cancels its clock
                                    // and any pending round transition.
                                    session = None;
                                    view = HomeView::Menu;
                                }
                                QuizAction::Continue => {}
                            }
                        } else {
                            view = HomeView::Menu;
                        }
                    }
                }
            }
        }

        // Engine tick every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            if let Some(active) = session.as_mut() {
                active.tick(&mut rng);
            }
            last_tick = Instant::now();
        }

        // The finished summary is handed over exactly once, no matter how
        // many times this loop comes back around while the overlay shows.
        if let Some(active) = session.as_mut() {
            if let Some(summary) = active.take_summary() {
                push_message(
                    &mut messages,
                    format!(
                        "{}: scored {} ({} right, {} wrong)",
                        active.kind().title(),
                        summary.score,
                        summary.correct.len(),
                        summary.incorrect.len()
                    ),
                );
                profile.stats.record_result(&summary);

                let record = MatchRecord::from_summary(&summary, Utc::now().timestamp());
                if let Err(e) = history.append(record) {
                    push_message(&mut messages, format!("Could not save history: {}", e));
                }
                save_profile(profile_manager, &mut profile, &mut messages);
            }
        }

        // Autosave every 30 seconds
        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            save_profile(profile_manager, &mut profile, &mut messages);
            last_autosave = Instant::now();
        }
    }
}

fn save_profile(
    profile_manager: &ProfileManager,
    profile: &mut Profile,
    messages: &mut VecDeque<String>,
) {
    profile.last_save_time = Utc::now().timestamp();
    if let Err(e) = profile_manager.save_profile(profile) {
        push_message(messages, format!("Could not save profile: {}", e));
    }
}

fn push_message(messages: &mut VecDeque<String>, text: String) {
    if messages.len() >= MESSAGE_LOG_CAPACITY {
        messages.pop_back();
    }
    messages.push_front(text);
}
