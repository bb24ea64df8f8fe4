//! pulpit-provider-local - file-backed persistence provider
//!
//! Implements the pulpit provider protocol (JSON over stdin/stdout),
//! storing series and sermons in a single JSON file under the user data
//! directory. Serves as the reference provider and lets pulpit run
//! without a hosted backend.

mod store;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use pulpit_core::gateway::MediaKind;
use pulpit_core::protocol::{Command, Request, Response};
use pulpit_core::series::Series;
use pulpit_core::sermon::Sermon;
use serde::Deserialize;

use store::FileStore;

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(stdout, "{}", response).unwrap();
                stdout.flush().unwrap();
                continue;
            }
        };

        let response = handle_request(request);

        writeln!(stdout, "{}", response).unwrap();
        stdout.flush().unwrap();
    }
}

fn handle_request(request: Request) -> String {
    let mut store = match FileStore::open() {
        Ok(s) => s,
        Err(e) => return Response::error(&format!("{:#}", e)),
    };

    match request.command {
        Command::ListSeries => respond(store.list_series()),
        Command::CreateSeries => match parse::<SeriesParams>(&request.params) {
            Ok(p) => respond(store.create_series(p.series)),
            Err(e) => e,
        },
        Command::UpdateSeries => match parse::<SeriesParams>(&request.params) {
            Ok(p) => respond(store.update_series(p.series)),
            Err(e) => e,
        },
        Command::DeleteSeries => match parse::<SeriesIdParams>(&request.params) {
            Ok(p) => respond(store.delete_series(&p.series_id)),
            Err(e) => e,
        },
        Command::ListSermons => match parse::<SeriesIdParams>(&request.params) {
            Ok(p) => respond(store.list_sermons(&p.series_id)),
            Err(e) => e,
        },
        Command::CreateSermon => match parse::<CreateSermonParams>(&request.params) {
            Ok(p) => respond(store.create_sermon(&p.series_id, p.sermon)),
            Err(e) => e,
        },
        Command::UpdateSermon => match parse::<SermonParams>(&request.params) {
            Ok(p) => respond(store.update_sermon(p.sermon)),
            Err(e) => e,
        },
        Command::DeleteSermon => match parse::<SermonIdParams>(&request.params) {
            Ok(p) => respond(store.delete_sermon(&p.sermon_id)),
            Err(e) => e,
        },
        Command::UploadMedia => match parse::<UploadMediaParams>(&request.params) {
            Ok(p) => respond(store.store_media(p.kind, &p.path)),
            Err(e) => e,
        },
    }
}

fn parse<T: for<'de> Deserialize<'de>>(params: &serde_json::Value) -> Result<T, String> {
    serde_json::from_value(params.clone())
        .map_err(|e| Response::error(&format!("Invalid params: {}", e)))
}

fn respond<T: serde::Serialize>(result: anyhow::Result<T>) -> String {
    match result {
        Ok(data) => Response::success(data),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}

#[derive(Debug, Deserialize)]
struct SeriesParams {
    series: Series,
}

#[derive(Debug, Deserialize)]
struct SeriesIdParams {
    series_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateSermonParams {
    series_id: String,
    sermon: Sermon,
}

#[derive(Debug, Deserialize)]
struct SermonParams {
    sermon: Sermon,
}

#[derive(Debug, Deserialize)]
struct SermonIdParams {
    sermon_id: String,
}

#[derive(Debug, Deserialize)]
struct UploadMediaParams {
    kind: MediaKind,
    path: PathBuf,
}
