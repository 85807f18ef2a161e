use std::env;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use bannerart::{strip_ansi, Alignment, GlyphTable, RenderOptions, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct ArtRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    banner: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    substring: String,
    #[serde(default)]
    align: String,
}

#[derive(Serialize)]
struct ArtResponse {
    result: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, PartialEq)]
enum ApiError {
    BadRequest(&'static str),
    NotFound(&'static str),
}

impl ApiError {
    fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) => m,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = env::var("BANNERART_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let fonts_dir = PathBuf::from(env::var("BANNERART_FONTS").unwrap_or_else(|_| "fonts".to_string()));

    let server = Server::http(addr.as_str()).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?;
    info!("listening on {addr}");

    for request in server.incoming_requests() {
        handle(request, &fonts_dir);
    }
    Ok(())
}

fn handle(mut request: Request, fonts_dir: &Path) {
    info!(method = %request.method(), url = request.url(), "request");

    let path = request.url().split('?').next().unwrap_or("");
    let response = if path == "/ascii-art" {
        ascii_art_response(&mut request, fonts_dir)
    } else {
        Response::from_string("404 - use POST /ascii-art").with_status_code(404)
    };

    if let Err(e) = request.respond(response) {
        error!("failed to send response: {e}");
    }
}

fn ascii_art_response(request: &mut Request, fonts_dir: &Path) -> Response<Cursor<Vec<u8>>> {
    let response = match request.method() {
        Method::Options => Response::from_string("").with_status_code(200),
        Method::Post => {
            let mut body = String::new();
            let parsed = request
                .as_reader()
                .read_to_string(&mut body)
                .map_err(|_| ())
                .and_then(|_| serde_json::from_str::<ArtRequest>(&body).map_err(|_| ()));
            match parsed {
                Err(()) => json_error(&ApiError::BadRequest("Invalid JSON")),
                Ok(req) => match respond(&req, fonts_dir) {
                    Ok(result) => json_response(200, &ArtResponse { result }),
                    Err(e) => json_error(&e),
                },
            }
        }
        _ => json_error(&ApiError::BadRequest("Method not allowed")),
    };
    with_cors(response)
}

/// Pure request handling: validation, banner lookup, render, ANSI strip.
fn respond(req: &ArtRequest, fonts_dir: &Path) -> Result<String, ApiError> {
    if req.text.is_empty() {
        return Err(ApiError::BadRequest("Text is required"));
    }
    let align: Alignment = req
        .align
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid alignment"))?;

    let banner = if req.banner.is_empty() {
        "standard"
    } else {
        req.banner.as_str()
    };
    let table = GlyphTable::load(fonts_dir.join(format!("{banner}.txt")))
        .map_err(|_| ApiError::NotFound("Banner not found"))?;

    let options = RenderOptions {
        color: (!req.color.is_empty()).then_some(req.color.as_str()),
        substring: (!req.substring.is_empty()).then_some(req.substring.as_str()),
        align,
        width: DEFAULT_WIDTH,
    };
    // The JSON surface is colorless; color still drives the range math.
    Ok(strip_ansi(&bannerart::render(&req.text, &table, &options)))
}

fn json_response<T: Serialize>(status: u16, value: &T) -> Response<Cursor<Vec<u8>>> {
    let body = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    Response::from_string(body)
        .with_status_code(status)
        .with_header(header("Content-Type", "application/json"))
}

fn json_error(e: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(
        e.status(),
        &ErrorResponse {
            error: e.message().to_string(),
        },
    )
}

fn with_cors(response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    response
        .with_header(header("Access-Control-Allow-Origin", "*"))
        .with_header(header("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .with_header(header("Access-Control-Allow-Headers", "Content-Type"))
}

fn header(name: &str, value: &str) -> Header {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).expect("valid static header")
}
