use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use mlp_graph::{Activation, Dataset, Network, NetworkBuilder, Sample};

struct CountingAlloc {
    allocs: AtomicUsize,
    reallocs: AtomicUsize,
}

impl CountingAlloc {
    const fn new() -> Self {
        Self {
            allocs: AtomicUsize::new(0),
            reallocs: AtomicUsize::new(0),
        }
    }

    fn reset(&self) {
        self.allocs.store(0, Ordering::Relaxed);
        self.reallocs.store(0, Ordering::Relaxed);
    }

    fn alloc_events(&self) -> usize {
        self.allocs.load(Ordering::Relaxed) + self.reallocs.load(Ordering::Relaxed)
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        self.allocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        self.reallocs.fetch_add(1, Ordering::Relaxed);
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOC: CountingAlloc = CountingAlloc::new();

fn make_dataset(len: usize, input_dim: usize, target_dim: usize) -> Dataset {
    let samples = (0..len)
        .map(|i| Sample::new(vec![0.1 * (i % 7) as f64; input_dim], vec![0.5; target_dim]))
        .collect();
    Dataset::from_samples(samples).unwrap()
}

fn build(input_dim: usize, hidden: usize, output_dim: usize) -> Network {
    let mut net = NetworkBuilder::new(input_dim, hidden, output_dim)
        .activation(Activation::Tanh)
        .learning_rate(1e-2)
        .build_with_seed(0)
        .unwrap();
    net.initialize().unwrap();
    net
}

#[test]
fn fit_does_not_allocate_per_sample() {
    let (input_dim, hidden, output_dim) = (16, 32, 4);

    let mut small = make_dataset(16, input_dim, output_dim);
    let mut large = make_dataset(16 * 64, input_dim, output_dim);
    let mut net_small = build(input_dim, hidden, output_dim);
    let mut net_large = net_small.clone();

    // Warm up logging callsites so their one-time registration is not counted.
    net_small.clone().fit(&mut small.clone(), 1).unwrap();

    ALLOC.reset();
    net_small.fit(&mut small, 1).unwrap();
    let alloc_small = ALLOC.alloc_events();

    ALLOC.reset();
    net_large.fit(&mut large, 1).unwrap();
    let alloc_large = ALLOC.alloc_events();

    assert_eq!(
        alloc_small, alloc_large,
        "expected allocation count to be independent of the number of samples"
    );
}
