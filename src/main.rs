//! tweet-sentiment - 하이브리드 트윗 감성 분석 CLI
//!
//! 사용법: `tweet-sentiment [학습파일.json] [텍스트...]`
//! 텍스트를 생략하면 표준 입력을 한 줄씩 분석합니다.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tweet_sentiment::config::{config_path, load_config};
use tweet_sentiment::{load_training_examples, HybridSentimentResult, SentimentEngine};

/// 학습 파일 기본 경로
const DEFAULT_TRAINING_PATH: &str = "data/seed_training.json";

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드 + 환경 변수 튜닝값
    let config = load_config(config_path()).with_env_overrides();

    let mut args = std::env::args().skip(1);
    let training_path = args.next().unwrap_or_else(|| DEFAULT_TRAINING_PATH.to_string());
    let texts: Vec<String> = args.collect();

    let examples = match load_training_examples(&training_path) {
        Ok(examples) => examples,
        Err(e) => {
            log::error!("학습 데이터 로드 실패 ({}): {}", training_path, e);
            return ExitCode::FAILURE;
        }
    };

    let engine = SentimentEngine::new(config);
    if let Err(e) = engine.train(&examples) {
        log::error!("모델 학습 실패: {}", e);
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !texts.is_empty() {
        for result in engine.analyze_batch(&texts) {
            if let Err(e) = print_result(&mut out, &result) {
                log::error!("출력 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = print_result(&mut out, &engine.analyze(&line)) {
            log::error!("출력 실패: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn print_result(out: &mut impl Write, result: &HybridSentimentResult) -> io::Result<()> {
    let json = serde_json::to_string(result).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
