use crate::constants::{BACKGROUND_ATTR, CANVAS_ID};
use crate::dom;
use crate::render::CanvasSurface;
use folio_core::{Background, BackgroundStyle};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub background: Rc<RefCell<Background>>,
    pub surface: CanvasSurface,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut bg = self.background.borrow_mut();
        bg.tick(dt);
        bg.draw(&mut self.surface);
    }
}

pub fn wire_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::require_by_id(document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let style = BackgroundStyle::from_attr(canvas.get_attribute(BACKGROUND_ATTR).as_deref());
    let (w, h) = dom::sync_canvas_to_window(&canvas);
    let background = Rc::new(RefCell::new(Background::new(style, w, h, rand::random())?));
    log::info!(
        "[background] {:?} {}x{} points={}",
        style,
        w,
        h,
        background.borrow().points().len()
    );

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let bg_resize = background.clone();
    let canvas_resize = canvas.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_to_window(&canvas_resize);
        if let Err(e) = bg_resize.borrow_mut().resize(w, h) {
            log::warn!("[background] resize skipped: {}", e);
        }
    });

    let bg_pointer = background.clone();
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        bg_pointer
            .borrow_mut()
            .set_pointer(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });

    start_loop(Rc::new(RefCell::new(FrameContext {
        background,
        surface: CanvasSurface::new(ctx),
        last_instant: Instant::now(),
    })));
    Ok(())
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
