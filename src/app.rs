use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::{FileClientStorage, HttpApiClient, LogAnalyticsSink, TerminalNotifier};
use crate::cli::{Command, CropRegion, ThemeAction};
use crate::config::AppConfig;
use crate::core::interfaces::adapters::{AnalyticsSink, ApiClient};
use crate::core::interfaces::ports::{ClientStorage, Notifier};
use crate::core::models::{ImageFile, ThemeMode};
use crate::core::orchestrators::{OcrController, TranslationController};
use crate::core::services::{
    language_catalog, wisdom_quotes, AnalyticsTracker, CopyTarget, ThemeService, ToastService,
};
use crate::global_constants;

pub struct ReadBeyondApp {
    config: AppConfig,
    toasts: ToastService,
    ocr: OcrController,
    translation: TranslationController,
    theme: ThemeService,
    analytics: AnalyticsTracker,
}

impl ReadBeyondApp {
    pub fn build(config: AppConfig) -> Self {
        Self::build_with(
            config.clone(),
            Arc::new(HttpApiClient::new(config.api_base_url.clone())),
            Arc::new(TerminalNotifier::new()),
            Arc::new(FileClientStorage::new()),
            Arc::new(LogAnalyticsSink),
            cfg!(debug_assertions),
        )
    }

    pub fn build_with(
        config: AppConfig,
        api_client: Arc<dyn ApiClient>,
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn ClientStorage>,
        analytics_sink: Arc<dyn AnalyticsSink>,
        is_development: bool,
    ) -> Self {
        log::info!("[APP] Initializing {}", global_constants::APPLICATION_NAME);

        let toasts = ToastService::new(notifier);
        let ocr = OcrController::new(api_client.clone(), toasts.clone());
        let translation = TranslationController::new(api_client, toasts.clone());

        let theme = ThemeService::new(storage);
        theme.init_theme();

        let analytics = AnalyticsTracker::new(
            config.analytics_measurement_id(),
            is_development,
            analytics_sink,
        );

        Self {
            config,
            toasts,
            ocr,
            translation,
            theme,
            analytics,
        }
    }

    pub fn print_banner(&self) {
        eprintln!("{}", global_constants::STARTUP_BANNER);
        eprintln!("  {}\n", self.config.site_url);
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Ocr { image, crop, copy } => {
                let text = self.extract_text(&image, crop, copy).await?;
                println!("{}", text);
            }
            Command::Translate {
                text,
                target_language,
                source_language,
                copy,
            } => {
                let translated = self
                    .translate_text(&text, source_language.as_deref(), &target_language, copy)
                    .await?;
                println!("{}", translated);
            }
            Command::Scan {
                image,
                target_language,
                crop,
                copy,
            } => {
                let (extracted, translated) =
                    self.scan_image(&image, &target_language, crop, copy).await?;
                println!("{}\n\n{}", extracted, translated);
            }
            Command::Languages { query } => {
                for line in self.language_lines(query.as_deref()) {
                    println!("{}", line);
                }
            }
            Command::Theme { action } => {
                let theme = self.change_theme(action)?;
                println!("Theme: {}", theme);
            }
            Command::Quote => println!("{}", wisdom_quotes::random_quote()),
        }

        Ok(())
    }

    pub async fn extract_text(
        &self,
        image_path: &Path,
        crop: Option<CropRegion>,
        copy: bool,
    ) -> Result<String> {
        self.analytics.track_page_view("/ocr");
        let image_file = self.capture_image(image_path, crop).await?;

        self.show_waiting_quote();
        let outcome = self.ocr.process_image(&image_file).await;
        let processing_time = self
            .ocr
            .last_result()
            .and_then(|result| result.processing_time_ms);
        self.analytics.track_ocr(outcome.is_ok(), processing_time);

        let text = outcome?;
        if copy {
            self.copy_result(&text, CopyTarget::ExtractedText);
        }
        Ok(text)
    }

    pub async fn translate_text(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: &str,
        copy: bool,
    ) -> Result<String> {
        self.show_waiting_quote();
        let outcome = self
            .translation
            .translate_from(text, source_language, target_language)
            .await;
        self.analytics
            .track_translation(target_language, outcome.is_ok());

        let translated = outcome?;
        if copy {
            self.copy_result(&translated, CopyTarget::Translation);
        }
        Ok(translated)
    }

    pub async fn scan_image(
        &self,
        image_path: &Path,
        target_language: &str,
        crop: Option<CropRegion>,
        copy: bool,
    ) -> Result<(String, String)> {
        let extracted = self.extract_text(image_path, crop, false).await?;
        let translated = self
            .translate_text(&extracted, None, target_language, copy)
            .await?;
        Ok((extracted, translated))
    }

    pub fn language_lines(&self, query: Option<&str>) -> Vec<String> {
        let languages = match query {
            Some(query) => language_catalog::search_languages(query),
            None => language_catalog::all_languages().iter().collect(),
        };

        languages
            .into_iter()
            .map(|language| {
                format!(
                    "{:<4}{:<12}{}",
                    language.code, language.name, language.native_name
                )
            })
            .collect()
    }

    pub fn change_theme(&self, action: Option<ThemeAction>) -> Result<ThemeMode> {
        match action {
            None => Ok(self.theme.current_theme()),
            Some(ThemeAction::Toggle) => self.theme.toggle_theme(),
            Some(ThemeAction::Dark) => {
                self.theme.set_theme(ThemeMode::Dark)?;
                Ok(ThemeMode::Dark)
            }
            Some(ThemeAction::Light) => {
                self.theme.set_theme(ThemeMode::Light)?;
                Ok(ThemeMode::Light)
            }
        }
    }

    async fn capture_image(
        &self,
        image_path: &Path,
        crop: Option<CropRegion>,
    ) -> Result<ImageFile> {
        let image_file = self
            .toasts
            .show_promise(
                ImageFile::load_from_path(image_path),
                "Loading image...",
                |file: &ImageFile| format!("Loaded {}", file.name),
                |error: &anyhow::Error| format!("Could not load image: {}", error),
            )
            .await?;
        self.analytics.track_image_capture();

        let Some(region) = crop else {
            return Ok(image_file);
        };

        log::info!("[APP] Cropping {} to {}", image_file.name, region);
        let cropped = image_file
            .crop_region(region.x, region.y, region.width, region.height)
            .inspect_err(|error| {
                self.toasts.show_error("Crop Failed", Some(&error.to_string()));
            })
            .with_context(|| format!("Failed to crop {}", image_file.name))?;
        self.analytics.track_image_crop();
        Ok(cropped)
    }

    fn show_waiting_quote(&self) {
        eprintln!("\"{}\"", wisdom_quotes::random_quote());
    }

    fn copy_result(&self, text: &str, target: CopyTarget) {
        match copy_to_clipboard(text) {
            Ok(()) => {
                self.toasts.show_success("Copied to clipboard", None);
                self.analytics.track_copy(target);
            }
            Err(error) => {
                log::warn!("[APP] Clipboard unavailable: {}", error);
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    Ok(())
}
