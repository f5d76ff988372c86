use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use documint_layout::commands::Cmd;
use documint_layout::config::LayoutConfig;
use documint_layout::messages::{AppMsg, Msg, ViewportMsg};
use documint_layout::model::{AppModel, Rect};
use documint_layout::panel::LayoutState;
use documint_layout::persistence::{load_layout_with, save_layout, KeyValueStore};
use documint_layout::update::update;

use super::input::{parse_line, InputEvent};
use super::mouse::{handle_move, handle_press, handle_release};
use super::text_renderer::describe;

/// Headless application: feeds input events through `update()` and executes
/// the resulting commands against the store and the output writer
pub struct App<W: Write> {
    model: AppModel,
    store: Box<dyn KeyValueStore>,
    out: W,
    echo: bool,
    running: bool,
    saves: usize,
}

impl<W: Write> App<W> {
    /// Create the app, restoring the stored layout unless `reset` is set
    pub fn new(
        config: LayoutConfig,
        store: Box<dyn KeyValueStore>,
        out: W,
        echo: bool,
        reset: bool,
    ) -> Self {
        let layout = if reset {
            tracing::info!("Starting from the default layout");
            LayoutState::default()
        } else {
            load_layout_with(store.as_ref(), &config.storage_key, config.min_panel_width)
        };

        Self {
            model: AppModel::new(config, layout),
            store,
            out,
            echo,
            running: true,
            saves: 0,
        }
    }

    /// Apply the initial container rectangle and viewport width
    pub fn startup(&mut self, container: (f32, f32), viewport: f32) -> Result<()> {
        let (width, height) = container;
        self.dispatch(Msg::Viewport(ViewportMsg::SetContainer(Rect::new(
            0.0, 0.0, width, height,
        ))))?;
        self.dispatch(Msg::resize(viewport))
    }

    #[cfg(test)]
    pub fn model(&self) -> &AppModel {
        &self.model
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of layout writes performed so far
    pub fn save_count(&self) -> usize {
        self.saves
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Process script lines until the input ends or a quit is requested
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read input")?;
            match parse_line(&line) {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Line {}: {}", index + 1, e);
                    eprintln!("line {}: {}", index + 1, e);
                }
            }
            if !self.running {
                break;
            }
        }

        // A release that never arrived still ends the drag
        if let Some(cmd) = handle_release(&mut self.model) {
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        let cmd = match event {
            InputEvent::Panel(msg) => update(&mut self.model, Msg::Panel(msg)),
            InputEvent::Press { x, y } => handle_press(&mut self.model, x, y),
            InputEvent::Move { x, y } => handle_move(&mut self.model, x, y),
            InputEvent::Release => handle_release(&mut self.model),
            InputEvent::Viewport { width } => update(&mut self.model, Msg::resize(width)),
            InputEvent::Container { width, height } => update(
                &mut self.model,
                Msg::Viewport(ViewportMsg::SetContainer(Rect::new(0.0, 0.0, width, height))),
            ),
            InputEvent::Tab(id) => update(
                &mut self.model,
                Msg::Viewport(ViewportMsg::SelectMobilePanel(id)),
            ),
            InputEvent::Show => {
                self.print_layout()?;
                None
            }
            InputEvent::Quit => update(&mut self.model, Msg::App(AppMsg::Quit)),
        };

        if let Some(cmd) = cmd {
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                if self.echo {
                    self.print_layout()?;
                }
            }
            Cmd::SaveLayout(state) => {
                let key = self.model.config.storage_key.clone();
                // A failed write leaves the in-memory layout authoritative
                match save_layout(self.store.as_mut(), &key, &state) {
                    Ok(()) => {
                        self.saves += 1;
                        tracing::debug!("Saved layout under {}", key);
                    }
                    Err(e) => tracing::warn!("Failed to save layout: {}", e),
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd)?;
                }
            }
            Cmd::Quit => {
                self.running = false;
            }
        }
        Ok(())
    }

    fn print_layout(&mut self) -> Result<()> {
        let text = describe(&self.model);
        self.out
            .write_all(text.as_bytes())
            .context("Failed to write layout")?;
        self.out.flush().context("Failed to flush output")
    }
}
