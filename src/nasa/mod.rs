//! A small blocking client for the parts of the NASA open APIs the wallpaper needs: the
//! Astronomy Picture of the Day, the Mars rover photo manifests, and the rover photo
//! listings.
//!
//! Every call makes exactly one request and fails on the first problem; there is no
//! retrying or caching.

mod types;

pub use types::*;

use crate::rover::Rover;
use crate::WallpaperError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use types::{ManifestResponse, PhotosResponse};

/// Where the NASA open APIs live
pub const DEFAULT_API_BASE: &str = "https://api.nasa.gov";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct NasaClient {
    http: reqwest::blocking::Client,
    base: String,
    api_key: String,
}

impl NasaClient {
    /// Create a client for the public NASA API, authenticating with `api_key`
    pub fn new(api_key: impl Into<String>) -> Result<NasaClient, WallpaperError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(NasaClient {
            http,
            base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
        })
    }

    /// A client that talks to a local test server directly, ignoring any proxy settings
    #[cfg(test)]
    pub(crate) fn local(api_key: &str, base: &str) -> NasaClient {
        let http = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .expect("can build a client");
        NasaClient {
            http,
            base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.to_string(),
        }
        .with_base(base)
    }

    /// Point the client at a different server, e.g. a mirror or a test server
    pub fn with_base(mut self, base: impl Into<String>) -> NasaClient {
        self.base = base.into().trim_end_matches('/').to_string();
        self
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        what: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WallpaperError> {
        let url = format!("{}{}", self.base, path);
        log::debug!("fetching {what} from {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WallpaperError::Status {
                what: what.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch today's Astronomy Picture of the Day. Thumbnails are requested so that days
    /// with a video still have a picture to show.
    pub fn apod(&self) -> Result<Apod, WallpaperError> {
        self.get_json(
            "APOD",
            "/planetary/apod",
            &[("thumbs", "true".to_string())],
        )
    }

    /// Fetch the photo manifest for a rover
    pub fn manifest(&self, rover: Rover) -> Result<PhotoManifest, WallpaperError> {
        let response: ManifestResponse = self.get_json(
            &format!("{} manifest", rover.display_name()),
            &format!("/mars-photos/api/v1/manifests/{}", rover.api_name()),
            &[],
        )?;
        Ok(response.photo_manifest)
    }

    /// List the photos a rover took on one sol, optionally only from a single camera
    pub fn photos(
        &self,
        rover: Rover,
        sol: u32,
        camera: Option<&str>,
    ) -> Result<Vec<RoverPhoto>, WallpaperError> {
        let mut query = vec![("sol", sol.to_string())];
        if let Some(camera) = camera {
            query.push(("camera", camera.to_string()));
        }

        let response: PhotosResponse = self.get_json(
            &format!("{} photos for sol {sol}", rover.display_name()),
            &format!("/mars-photos/api/v1/rovers/{}/photos", rover.api_name()),
            &query,
        )?;
        Ok(response.photos)
    }

    /// Find the most recent sol, at or before `max_sol`, on which `camera` took any photos,
    /// and return that sol with its photos
    pub fn latest_photos(
        &self,
        rover: Rover,
        max_sol: u32,
        camera: &str,
    ) -> Result<(u32, Vec<RoverPhoto>), WallpaperError> {
        find_latest_sol(max_sol, |sol| self.photos(rover, sol, Some(camera)))?.ok_or_else(|| {
            WallpaperError::NoRoverPhotos {
                rover: rover.display_name().to_string(),
                camera: camera.to_string(),
            }
        })
    }

    /// Download the body of an arbitrary URL, such as an image found through the API
    pub fn download(&self, url: &str) -> Result<Vec<u8>, WallpaperError> {
        log::debug!("downloading {url}");
        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WallpaperError::Status {
                what: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Walks back from `max_sol` one sol at a time until `fetch` returns something. Sol 0 is
/// never asked for. Returns `None` when every sol came back empty.
pub fn find_latest_sol<T, F>(
    max_sol: u32,
    mut fetch: F,
) -> Result<Option<(u32, Vec<T>)>, WallpaperError>
where
    F: FnMut(u32) -> Result<Vec<T>, WallpaperError>,
{
    for sol in (1..=max_sol).rev() {
        let found = fetch(sol)?;
        if !found.is_empty() {
            log::info!("found {} photos on sol {sol}", found.len());
            return Ok(Some((sol, found)));
        }
        log::debug!("no photos on sol {sol}");
    }
    Ok(None)
}

/// A throwaway HTTP server for exercising the client without touching the network
#[cfg(test)]
pub(crate) mod test_server {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};

    pub struct Response {
        pub status: u16,
        pub content_type: &'static str,
        pub body: Vec<u8>,
    }

    impl Response {
        pub fn json(body: &str) -> Response {
            Response {
                status: 200,
                content_type: "application/json",
                body: body.as_bytes().to_vec(),
            }
        }

        pub fn status(status: u16) -> Response {
            Response {
                status,
                content_type: "text/plain",
                body: b"nope".to_vec(),
            }
        }

        pub fn bytes(body: Vec<u8>) -> Response {
            Response {
                status: 200,
                content_type: "application/octet-stream",
                body,
            }
        }
    }

    /// Serves requests on a background thread until the test process exits. Returns the
    /// base URL of the server and a log of every request target it has seen.
    pub fn serve<H>(handler: H) -> (String, Arc<Mutex<Vec<String>>>)
    where
        H: Fn(&str) -> Response + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("can bind a local port");
        let base = format!("http://{}", listener.local_addr().expect("has an address"));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().expect("can clone stream"));

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // drain the headers
                let mut header = String::new();
                while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
                    header.clear();
                }

                let target = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();
                log.lock().expect("log lock").push(target.clone());

                let response = handler(&target);
                let head = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    response.status,
                    response.content_type,
                    response.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&response.body);
                let _ = stream.flush();
            }
        });

        (base, seen)
    }
}
