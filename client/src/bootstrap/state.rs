use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

use domain::progress::UploadProgress;
use imgconsole_adapters::outgoing::{
    fs_tokio::{file_loader_tokio::TokioFileLoaderAdapter, result_store_fs::FsResultStoreAdapter},
    http_reqwest::image_service_reqwest::ReqwestImageServiceAdapter,
    image_rs::preview_probe_image::ImagePreviewProbeAdapter,
    progress_watch::WatchProgressAdapter,
};
use imgconsole_application::config::ClientSettings;
use imgconsole_application::error::AppError;
use imgconsole_application::forms::service::FormService;
use imgconsole_application::infrastructure_config::Config;
use imgconsole_application::ports::outgoing::{
    file_loader::DynFileLoaderPort, image_service::DynImageServicePort,
    preview_probe::DynPreviewProbePort, progress::DynProgressSinkPort,
    result_store::DynResultStorePort,
};
use imgconsole_application::session::service::{SessionService, SessionServiceDeps};

/// Everything the interactive console needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session_service: Arc<SessionService>,
    pub progress_rx: watch::Receiver<UploadProgress>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let settings = ClientSettings::from_config(&config)?;

        let (progress_tx, progress_rx) = watch::channel(UploadProgress::Idle);

        let image_service: DynImageServicePort =
            Arc::new(ReqwestImageServiceAdapter::new(&settings)?);
        let file_loader: DynFileLoaderPort = Arc::new(TokioFileLoaderAdapter::new());
        let preview_probe: DynPreviewProbePort = Arc::new(ImagePreviewProbeAdapter::new());
        let result_store: DynResultStorePort = Arc::new(FsResultStoreAdapter::new(PathBuf::from(
            &config.output.directory,
        )));
        let progress: DynProgressSinkPort = Arc::new(WatchProgressAdapter::new(progress_tx));

        let session_service = SessionService::new(
            Arc::new(FormService::new()),
            SessionServiceDeps {
                image_service,
                file_loader,
                preview_probe,
                result_store,
                progress,
            },
        );

        Ok(Self {
            config,
            session_service,
            progress_rx,
        })
    }
}
