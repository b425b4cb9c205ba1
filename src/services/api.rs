use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::{DriveClient, DriveError};
use crate::logic::breadcrumbs::build_breadcrumbs;
use crate::model::{FolderListing, LoadRequest};

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List a folder and resolve its title and breadcrumb trail
    LoadFolder(LoadRequest),
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    FolderLoaded {
        generation: u64,
        result: Result<FolderListing, DriveError>,
    },
}

/// Load everything the listing view needs for `request`
///
/// The listing and the folder's own name are fetched concurrently. Breadcrumb
/// names are then resolved per path segment, reusing any name already fetched
/// during this load, so the last crumb always matches the title.
pub async fn load_folder(
    client: &DriveClient,
    request: &LoadRequest,
    parallel_breadcrumbs: bool,
) -> Result<FolderListing, DriveError> {
    let (items, title) = tokio::join!(
        client.list_children(&request.folder_id),
        client.resolve_name(&request.folder_id)
    );
    let items = items?;
    let title = title?;

    let mut names = HashMap::new();
    names.insert(request.folder_id.clone(), title.clone());

    let segments = &request.route.sub_path;
    let segment_names = if parallel_breadcrumbs {
        resolve_parallel(client, segments, names).await?
    } else {
        resolve_sequential(client, segments, names).await?
    };

    let breadcrumbs = build_breadcrumbs(&request.route, &request.term_name, &segment_names);

    Ok(FolderListing {
        title,
        items,
        breadcrumbs,
    })
}

async fn resolve_sequential(
    client: &DriveClient,
    segments: &[String],
    mut names: HashMap<String, String>,
) -> Result<Vec<String>, DriveError> {
    let mut resolved = Vec::with_capacity(segments.len());
    for segment in segments {
        let name = match names.get(segment) {
            Some(name) => name.clone(),
            None => {
                let name = client.resolve_name(segment).await?;
                names.insert(segment.clone(), name.clone());
                name
            }
        };
        resolved.push(name);
    }
    Ok(resolved)
}

async fn resolve_parallel(
    client: &DriveClient,
    segments: &[String],
    mut names: HashMap<String, String>,
) -> Result<Vec<String>, DriveError> {
    let mut tasks = JoinSet::new();
    let mut pending = Vec::new();

    for segment in segments {
        if names.contains_key(segment) || pending.contains(segment) {
            continue;
        }
        pending.push(segment.clone());

        let client = client.clone();
        let segment = segment.clone();
        tasks.spawn(async move {
            let name = client.resolve_name(&segment).await;
            (segment, name)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((segment, name)) => {
                names.insert(segment, name?);
            }
            // A panicked lookup leaves the segment id as its label
            Err(e) => tracing::warn!(error = %e, "breadcrumb lookup task failed"),
        }
    }

    Ok(segments
        .iter()
        .map(|segment| names.get(segment).cloned().unwrap_or_else(|| segment.clone()))
        .collect())
}

/// API service worker that runs loads in the background
pub struct ApiService {
    client: DriveClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    parallel_breadcrumbs: bool,
}

impl ApiService {
    pub fn new(
        client: DriveClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        parallel_breadcrumbs: bool,
    ) -> Self {
        Self {
            client,
            response_tx,
            parallel_breadcrumbs,
        }
    }

    /// Run `request` on its own task; loads are never cancelled, the model
    /// drops stale results by generation
    fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let parallel = self.parallel_breadcrumbs;

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request, parallel).await;
            let _ = response_tx.send(response);
        });
    }

    async fn execute_request(client: &DriveClient, request: ApiRequest, parallel: bool) -> ApiResponse {
        match request {
            ApiRequest::LoadFolder(request) => {
                tracing::debug!(
                    generation = request.generation,
                    route = %request.route,
                    "loading folder"
                );
                let result = load_folder(client, &request, parallel).await;
                tracing::debug!(
                    generation = request.generation,
                    ok = result.is_ok(),
                    "folder load finished"
                );

                ApiResponse::FolderLoaded {
                    generation: request.generation,
                    result,
                }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DriveClient,
    parallel_breadcrumbs: bool,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx, parallel_breadcrumbs);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
    });

    (request_tx, response_rx)
}
