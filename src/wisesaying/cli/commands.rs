//! # REPL Session
//!
//! `run()` builds the [`AppContext`] once (store, configuration, startup reset and
//! seeding) and hands it to a [`Session`], which owns the read-dispatch-print loop.
//!
//! Register and modify are two-phase: the session collects the answers to its
//! prompts first and only then calls the API, so no business logic ever waits on
//! the terminal.

use super::render::{print_messages, render_quote_page, render_search_header};
use super::request::{Action, Request};
use super::setup::Cli;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;
use wisesaying::api::{QuoteUpdate, WiseApi};
use wisesaying::config::WiseConfig;
use wisesaying::error::Result;
use wisesaying::logging;
use wisesaying::store::fs::FileStore;
use wisesaying::store::QuoteStore;

const MSG_INVALID_ID: &str = "id를 정확히 입력해주세요.";
const MSG_INVALID_COMMAND: &str = "올바른 명령을 입력해주세요.";

pub(super) struct AppContext<S: QuoteStore> {
    api: WiseApi<S>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut ctx, stdin.lock(), stdout.lock()).run()
}

fn init_context(cli: &Cli) -> Result<AppContext<FileStore>> {
    let store = FileStore::open(&cli.db_dir)?;

    let mut config = WiseConfig::load(&cli.db_dir)?;
    if let Some(path) = &cli.export_path {
        config.export_path = path.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.set_page_size(page_size);
    }

    let mut api = WiseApi::new(store, config);

    // Startup notes go to stderr; stdout carries only the session protocol.
    let mut stderr = io::stderr();
    if cli.reset {
        let result = api.reset()?;
        info!(db = %cli.db_dir.display(), "store reset");
        print_messages(&mut stderr, &result.messages)?;
    }
    if cli.seed > 0 {
        let result = api.seed(cli.seed)?;
        info!(db = %cli.db_dir.display(), count = cli.seed, "store seeded");
        print_messages(&mut stderr, &result.messages)?;
    }

    Ok(AppContext { api })
}

enum Flow {
    Continue,
    Exit,
}

pub(super) struct Session<'a, S: QuoteStore, R: BufRead, W: Write> {
    ctx: &'a mut AppContext<S>,
    input: R,
    out: W,
}

impl<'a, S: QuoteStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub(super) fn new(ctx: &'a mut AppContext<S>, input: R, out: W) -> Self {
        Self { ctx, input, out }
    }

    /// Runs until `종료` or end of input.
    pub(super) fn run(mut self) -> Result<()> {
        writeln!(self.out, "== 명언 앱 ==")?;
        loop {
            let Some(line) = self.prompt("명령) ")? else {
                return Ok(());
            };
            let request = Request::parse(&line);
            if let Flow::Exit = self.dispatch(&request)? {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, request: &Request) -> Result<Flow> {
        match &request.action {
            Action::Exit => Ok(Flow::Exit),
            Action::Register => self.handle_register(),
            Action::List => self.handle_list(request),
            Action::Delete => self.handle_delete(request),
            Action::Modify => self.handle_modify(request),
            Action::Build => self.handle_build(),
            Action::Unknown(name) => {
                tracing::debug!(action = %name, "unknown command");
                writeln!(self.out, "{}", MSG_INVALID_COMMAND)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Prints `label` and reads one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn handle_register(&mut self) -> Result<Flow> {
        let Some(content) = self.prompt("명언 : ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("작가 : ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.ctx.api.register(&content, &author)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_list(&mut self, request: &Request) -> Result<Flow> {
        let keyword_type = request.get("keywordType");
        let keyword = request.get("keyword");
        let page = request.get_i64("page").unwrap_or(1);

        if let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) {
            write!(self.out, "{}", render_search_header(keyword_type, keyword))?;
        }

        let result = self.ctx.api.list(keyword_type, keyword, page)?;
        if let Some(paged) = &result.listed_quotes {
            write!(self.out, "{}", render_quote_page(paged))?;
        }
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self, request: &Request) -> Result<Flow> {
        let Some(id) = request.get_id("id") else {
            writeln!(self.out, "{}", MSG_INVALID_ID)?;
            return Ok(Flow::Continue);
        };

        let result = self.ctx.api.delete(id)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_modify(&mut self, request: &Request) -> Result<Flow> {
        let Some(id) = request.get_id("id") else {
            writeln!(self.out, "{}", MSG_INVALID_ID)?;
            return Ok(Flow::Continue);
        };

        let Some(before) = self.ctx.api.get(id)? else {
            writeln!(self.out, "{}번 명언은 존재하지 않습니다.", id)?;
            return Ok(Flow::Continue);
        };

        writeln!(self.out, "명언(기존) : {}", before.content)?;
        let Some(content) = self.prompt("명언 : ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.out, "작가(기존) : {}", before.author)?;
        let Some(author) = self.prompt("작가 : ")? else {
            return Ok(Flow::Exit);
        };

        let update = QuoteUpdate::new(Some(content), Some(author));
        let result = self.ctx.api.modify(id, &update)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_build(&mut self) -> Result<Flow> {
        let result = self.ctx.api.build_export(None)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }
}
