use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, info, warn};

use crate::config::LspConfig;
use crate::lsp::completion::{TRIGGER_CHARACTER, complete_versions};
use crate::lsp::documents::DocumentStore;
use crate::lsp::hover::{description_hover, hover_description};
use crate::parser::requirements::RequirementsParser;
use crate::version::registries::PypiRegistry;
use crate::version::registry::Registry;
use crate::version::service::PackageMetadataService;

pub struct Backend {
    client: Client,
    /// Registry to use instead of the configured PyPI endpoint
    registry_override: Option<Arc<dyn Registry>>,
    /// Created on `initialize`, dropped on `shutdown`
    service: RwLock<Option<Arc<PackageMetadataService>>>,
    config: RwLock<LspConfig>,
    documents: DocumentStore,
    parser: RequirementsParser,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_registry(client, None)
    }

    /// Build a Backend that fetches metadata from a custom registry
    pub fn build(client: Client, registry: Arc<dyn Registry>) -> Self {
        Self::with_registry(client, Some(registry))
    }

    fn with_registry(client: Client, registry_override: Option<Arc<dyn Registry>>) -> Self {
        Self {
            client,
            registry_override,
            service: RwLock::new(None),
            config: RwLock::new(LspConfig::default()),
            documents: DocumentStore::new(),
            parser: RequirementsParser::new(),
        }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..Default::default()
                },
            )),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec![TRIGGER_CHARACTER.to_string()]),
                ..Default::default()
            }),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            ..Default::default()
        }
    }

    async fn activate(&self, config: LspConfig) {
        let registry = match &self.registry_override {
            Some(registry) => Arc::clone(registry),
            None => {
                info!("Using package registry at {}", config.registry.url);
                Arc::new(PypiRegistry::new(config.registry.url.clone()))
            }
        };

        *self.service.write().await = Some(Arc::new(PackageMetadataService::new(registry)));
        *self.config.write().await = config;
    }

    async fn service(&self) -> Option<Arc<PackageMetadataService>> {
        self.service.read().await.clone()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.client
            .log_message(MessageType::INFO, "LSP server initializing")
            .await;

        let config = LspConfig::from_initialization_options(params.initialization_options)
            .unwrap_or_else(|e| {
                warn!("Invalid initialization options, using defaults: {}", e);
                LspConfig::default()
            });
        self.activate(config).await;

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.client
            .log_message(MessageType::INFO, "LSP server shutting down")
            .await;

        if let Some(service) = self.service.write().await.take() {
            service.clear();
        }
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        debug!("Document opened: {}", document.uri);

        self.documents
            .open(document.uri, document.language_id, document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // With FULL sync mode, the last content change contains the full document text
        let Some(content) = params.content_changes.into_iter().last().map(|c| c.text) else {
            return;
        };

        debug!("Document changed: {}", params.text_document.uri);
        self.documents.update(&params.text_document.uri, content);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("Document closed: {}", params.text_document.uri);
        self.documents.close(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        if !self.config.read().await.completion.enabled {
            return Ok(None);
        }

        let position = params.text_document_position.position;
        let uri = params.text_document_position.text_document.uri;

        let Some(line_prefix) = self.documents.line_prefix(&uri, position) else {
            return Ok(None);
        };

        let Some(service) = self.service().await else {
            warn!("Completion requested before initialize");
            return Ok(None);
        };

        let items = complete_versions(&service, &self.parser, &line_prefix).await;
        debug!("Returning {} completion items for {}", items.len(), uri);

        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        if !self.config.read().await.hover.enabled {
            return Ok(None);
        }

        let position = params.text_document_position_params.position;
        let uri = params.text_document_position_params.text_document.uri;

        let Some(line) = self.documents.line(&uri, position) else {
            return Ok(None);
        };

        let Some(service) = self.service().await else {
            warn!("Hover requested before initialize");
            return Ok(None);
        };

        Ok(hover_description(&service, &self.parser, &line)
            .await
            .map(description_hover))
    }
}
