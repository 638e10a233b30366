use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::{cursor, execute, terminal};
use dragdom::{
    clamp_scroll, layout, pointer_event, Dimension, Dom, DragScroll, DragScrollConfig, Node, Rect,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const CARD_WIDTH: u16 = 12;
const CARD_COUNT: u16 = 15;
const STRIP_WIDTH: u16 = 40;

struct RawScreen {
    stdout: io::Stdout,
}

impl RawScreen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn ui() -> Dom {
    let mut dom = Dom::new(Node::col().id("app"));
    dom.insert(
        Node::row()
            .id("cards")
            .width(Dimension::Cells(STRIP_WIDTH))
            .height(Dimension::Cells(5)),
    );
    dom.append_child("app", "cards").expect("app is the root");
    for i in 1..=CARD_COUNT {
        let id = format!("card-{i}");
        dom.insert(
            Node::text(format!("[ Card {i:>2} ] "))
                .id(&id)
                .width(Dimension::Cells(CARD_WIDTH))
                .height(Dimension::Cells(5)),
        );
        dom.append_child("cards", &id).expect("cards exists");
    }
    dom
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("drag.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut dom = ui();
    let mut config = DragScrollConfig::default();
    let mut drag = DragScroll::new("cards");

    let mut screen = RawScreen::new()?;
    let (width, height) = terminal::size()?;
    let mut view = layout(&dom, Rect::from_size(width, height));
    drag.bind(&mut dom, &view).expect("cards node exists");

    loop {
        let (width, height) = terminal::size()?;
        view = layout(&dom, Rect::from_size(width, height));
        clamp_scroll(&mut dom, &view);
        drag.reconcile(&mut dom, &view);
        draw(&mut screen.stdout, &dom, &drag, config)?;

        let raw = event::read()?;
        match raw {
            CrosstermEvent::Key(key) => {
                let mut changed = true;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') => config.scrollbar_hidden = !config.scrollbar_hidden,
                    KeyCode::Char('d') => config.disabled = !config.disabled,
                    KeyCode::Char('x') => config.x_disabled = !config.x_disabled,
                    KeyCode::Char('y') => config.y_disabled = !config.y_disabled,
                    _ => changed = false,
                }
                if changed {
                    drag.set_config(&mut dom, &view, config)
                        .expect("cards stays in the tree");
                }
            }
            other => {
                if let Some(pointer) = pointer_event(&other) {
                    drag.process_events(&mut dom, &view, &[pointer]);
                }
            }
        }
    }

    drag.unbind(&mut dom);
    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    dom: &Dom,
    drag: &DragScroll,
    config: DragScrollConfig,
) -> io::Result<()> {
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(
        stdout,
        "Drag the cards with the mouse.  q quit  h scrollbar  d disable  x/y lock axis"
    )?;

    let scroll_x = dom.scroll_left("cards");
    execute!(stdout, cursor::MoveTo(0, 1))?;
    write!(
        stdout,
        "scroll: {scroll_x:>3}  pressed: {:5}  wrapper: {:5}  {config:?}",
        drag.is_pressed(),
        drag.wrapper_id().is_some(),
    )?;

    // Visible slice of the card strip (labels are plain ASCII, one row of
    // the strip is enough to show the motion)
    let strip: String = (1..=CARD_COUNT)
        .map(|i| format!("[ Card {i:>2} ] "))
        .collect();
    let start = (scroll_x as usize).min(strip.len());
    let end = (start + STRIP_WIDTH as usize).min(strip.len());
    execute!(stdout, cursor::MoveTo(0, 3))?;
    write!(stdout, "|{:<width$}|", &strip[start..end], width = STRIP_WIDTH as usize)?;

    // Crude scrollbar under the strip, gone while the wrapper hides it
    if drag.wrapper_id().is_none() {
        let content = strip.len() as u16;
        let max_scroll = content.saturating_sub(STRIP_WIDTH);
        let thumb_width = (STRIP_WIDTH * STRIP_WIDTH / content.max(1)).max(1);
        let range = STRIP_WIDTH - thumb_width;
        let thumb_pos = if max_scroll > 0 {
            (scroll_x.min(max_scroll) * range) / max_scroll
        } else {
            0
        };
        let mut bar = String::with_capacity(STRIP_WIDTH as usize);
        for cell in 0..STRIP_WIDTH {
            if cell >= thumb_pos && cell < thumb_pos + thumb_width {
                bar.push('█');
            } else {
                bar.push('─');
            }
        }
        execute!(stdout, cursor::MoveTo(0, 4))?;
        write!(stdout, " {bar} ")?;
    }

    stdout.flush()
}
