use colorsmith::{
    Color, ColorExtractor, ColorPaletteBuilder, GenerationOptions, RgbaBuffer, Role, Strategy,
    ThemeGenerator,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gradient(width: u32, height: u32) -> RgbaBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]);
        }
    }
    RgbaBuffer::new(width, height, colorsmith::Channels::Rgb, data).unwrap()
}

fn benchmark_strategies(c: &mut Criterion) {
    let base = Color::new(0x21, 0x96, 0xf3);
    let options = GenerationOptions::with_count(10);
    let mut group = c.benchmark_group("strategy");
    for strategy in Strategy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &strategy, |b, s| {
            b.iter(|| s.generate(black_box(base), &options).unwrap())
        });
    }
    group.finish();
}

fn benchmark_extraction(c: &mut Criterion) {
    let extractor = ColorExtractor::new();
    let mut group = c.benchmark_group("extraction");
    for size in [64u32, 256, 1024] {
        let image = gradient(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| extractor.extract(black_box(image), 8).unwrap())
        });
    }
    group.finish();
}

fn benchmark_theme(c: &mut Criterion) {
    let mut builder = ColorPaletteBuilder::new();
    builder
        .with_base_color(Color::new(0xe9, 0x1e, 0x63))
        .with_strategy(Strategy::WebsiteTheme);
    let palette = builder.build().unwrap();
    let generator = ThemeGenerator::new();

    c.bench_function("theme_generate", |b| {
        b.iter(|| generator.generate(black_box(&palette), &Role::ALL).unwrap())
    });
}

criterion_group!(benches, benchmark_strategies, benchmark_extraction, benchmark_theme);
criterion_main!(benches);
