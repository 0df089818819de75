use crate::error::Error;
use clap::builder::BoolishValueParser;
use clap::{crate_description, crate_name, crate_version, ArgAction, Parser};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 서비스 설정 (명령행 인자 또는 환경 변수)
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = crate_name!())]
#[command(version = crate_version!())]
#[command(about = crate_description!())]
pub struct Config {
    /// Postgres 접속 URL
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url: String,

    /// 서버 바인딩 주소
    #[arg(long = "listen-addr")]
    #[arg(env = "LISTEN_ADDR")]
    #[arg(default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// 커넥션 풀 최대 크기
    #[arg(long = "database-max-connections")]
    #[arg(env = "DATABASE_MAX_CONNECTIONS")]
    #[arg(default_value_t = DEFAULT_MAX_CONNECTIONS)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: u32,

    /// 시작 시 내장 스키마 적용 여부
    #[arg(long = "init-schema")]
    #[arg(env = "INIT_SCHEMA")]
    #[arg(default_value_t = false)]
    #[arg(action = ArgAction::Set)]
    #[arg(value_parser = BoolishValueParser::new())]
    pub init_schema: bool,
}

impl Config {
    /// 환경 변수만으로 설정 로드 (명령행 인자는 보지 않는다)
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::try_parse_from([crate_name!()])?)
    }
}
