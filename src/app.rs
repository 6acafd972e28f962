use crate::controller::core::{init, transition, Event, Model};
use crate::controller::render::{self, Intent};
use crate::controller::run_effect::RunEffect;
use crate::file_picker::interface::FilePicker;
use crate::prediction_api::interface::PredictionApi;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub struct App {
    model: Model,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    file_picker: Arc<dyn FilePicker>,
    /// GPU texture for the current preview, keyed by the selection it was
    /// made from. Dropped before a replacement is created.
    preview_texture: Option<(u64, egui::TextureHandle)>,
}

impl App {
    pub fn new(
        prediction_api: Arc<dyn PredictionApi>,
        file_picker: Arc<dyn FilePicker>,
        ui_ctx: egui::Context,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(prediction_api, event_sender.clone(), ui_ctx);

        let (model, effects) = init();
        run_effect.spawn(effects);

        Self {
            model,
            event_sender,
            event_receiver,
            run_effect,
            file_picker,
            preview_texture: None,
        }
    }

    fn apply(&mut self, event: Event) {
        log::debug!("event: {:?}", event);
        let (model, effects) = transition(self.model.clone(), event);
        if !effects.is_empty() {
            log::debug!("effects: {:?}", effects);
        }
        self.model = model;
        self.run_effect.spawn(effects);
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply(event);
        }
    }

    fn sync_preview_texture(&mut self, ctx: &egui::Context) {
        match &self.model.preview {
            Some(preview) => {
                let stale = self
                    .preview_texture
                    .as_ref()
                    .map_or(true, |(seq, _)| *seq != self.model.file_seq);
                if stale {
                    // Release the old handle before allocating the new one.
                    self.preview_texture = None;
                    let pixels = egui::ColorImage::from_rgba_unmultiplied(
                        [preview.width as usize, preview.height as usize],
                        &preview.rgba,
                    );
                    let texture =
                        ctx.load_texture("otolith-preview", pixels, egui::TextureOptions::LINEAR);
                    self.preview_texture = Some((self.model.file_seq, texture));
                }
            }
            None => self.preview_texture = None,
        }
    }

    fn handle_intents(&mut self, ctx: &egui::Context, intents: Vec<Intent>) {
        for intent in intents {
            match intent {
                Intent::UploadClicked => {
                    // The native dialog must run on the UI thread; it blocks
                    // this frame, which matches how the dialog behaves anyway.
                    let picked = self.file_picker.pick_image();
                    let _ = self.event_sender.send(Event::FilePicked(picked));
                }
                Intent::PredictClicked => {
                    let _ = self.event_sender.send(Event::PredictRequested);
                }
            }
            ctx.request_repaint();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.sync_preview_texture(ctx);

        let preview = self.preview_texture.as_ref().map(|(_, texture)| texture);
        let intents = render::show(ctx, &self.model, preview);

        self.handle_intents(ctx, intents);
    }
}
