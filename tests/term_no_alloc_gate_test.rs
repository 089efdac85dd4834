use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_platformer::core::{Bitmap, GameAssets, GameState};
use tui_platformer::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use tui_platformer::types::{GameConfig, PressedKeys};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn tick_render_and_diff_encode_are_allocation_free_after_warmup() {
    let assets = GameAssets::new(Bitmap::solid(64, 64, [0, 0, 255, 255]), None);
    let mut state = GameState::new(&GameConfig::default(), assets);
    let keys = PressedKeys::new(false, true);

    let mut view = GameView::new();
    let viewport = Viewport::new(80, 24);
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    let mut buf: Vec<u8> = Vec::with_capacity(256 * 1024);

    // Warm-up: first render sizes the canvas.
    view.render_into(&state, viewport, &mut prev);
    encode_full_into(&prev, &mut buf).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..300 {
            state.tick();
            state.handle_move(keys);
            view.render_into(&state, viewport, &mut next);

            buf.clear();
            encode_diff_into(&prev, &next, &mut buf).unwrap();
            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert_eq!(allocs, 0);
}
