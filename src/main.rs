//! Hangulize - 외래어 한글 표기 변환기

use clap::Parser;
use hangulize::config::{load_config, load_config_from, HangulizeConfig};
use hangulize::core::converter::hangulize_batch;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

/// 외래어를 한글 표기로 바꿉니다
#[derive(Debug, Parser)]
#[command(name = "hangulize", version, about)]
struct Cli {
    /// 단어 (없으면 표준 입력을 한 줄씩 읽음)
    words: Vec<String>,

    /// 언어 코드 (예: spa, fin, kat.narrow)
    #[arg(short, long, env = "HANGULIZE_LANG")]
    lang: Option<String>,

    /// 설정 파일
    #[arg(short, long, value_name = "FILE", env = "HANGULIZE_CONFIG")]
    config: Option<PathBuf>,

    /// 지원 언어 목록 출력
    #[arg(long)]
    list: bool,

    /// 로그 상세도 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 설정 로드
    let config = match &cli.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("hangulize: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => load_config(),
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hangulize: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &HangulizeConfig) -> hangulize::Result<()> {
    let registry = config.build_registry();

    if cli.list {
        for (code, name) in registry.list() {
            println!("{:<12}{}", code, name);
        }
        return Ok(());
    }

    let code = cli.lang.as_deref().unwrap_or(&config.default_lang);
    let words = if cli.words.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()?
    } else {
        vec![cli.words.join(" ")]
    };

    for line in hangulize_batch(&registry, &words, code)? {
        println!("{}", line);
    }
    Ok(())
}
