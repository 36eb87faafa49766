use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use camtilt_geometry::PerspectiveParams;
use camtilt_image::Image;
use camtilt_imgproc::{
    interpolation::InterpolationMode,
    warp::{warp_perspective, warp_perspective_tilt},
};
use rand::Rng;

fn bench_warp_perspective(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpPerspective");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image with random content
        let mut rng = rand::rng();
        let data = (0..width * height * 3)
            .map(|_| rng.random_range(0.0..1.0))
            .collect::<Vec<f32>>();
        let image_size = [*width, *height].into();
        let image = Image::<f32, 3>::new(image_size, data).unwrap();

        let params = PerspectiveParams::new(0.5, 0.5);
        let transform = params.build(*width as f64, *height as f64).unwrap();
        let canvas_size = [transform.output_size.width, transform.output_size.height].into();
        let output = Image::<f32, 3>::from_size_val(canvas_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("warp_perspective", &parameter_string),
            &(&image, &output, transform.matrix),
            |b, i| {
                let (src, mut dst, m) = (i.0.clone(), i.1.clone(), i.2);
                b.iter(|| {
                    warp_perspective(
                        black_box(&src),
                        black_box(&mut dst),
                        black_box(&m),
                        black_box(InterpolationMode::Bilinear),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("warp_perspective_tilt", &parameter_string),
            &(&image, params),
            |b, i| {
                let (src, params) = (i.0.clone(), i.1);
                b.iter(|| {
                    warp_perspective_tilt(
                        black_box(&src),
                        black_box(&params),
                        black_box(InterpolationMode::Nearest),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_perspective);
criterion_main!(benches);
