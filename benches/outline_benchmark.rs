//! Benchmarks for outline inference.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pdf_outline::{OutlineExtractor, OutlinePipeline, TextSpan};

/// Synthetic spans: per page one heading, two subheadings and body lines.
fn create_spans(page_count: u32) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::new(
        "Synthetic Benchmark Report",
        1,
        "Helvetica-Bold",
        24.0,
    )];

    for page in 1..=page_count {
        spans.push(TextSpan::new(format!("{}. Chapter", page), page, "Helvetica-Bold", 18.0));
        for sub in 1..=2 {
            spans.push(TextSpan::new(
                format!("{}.{} Section", page, sub),
                page,
                "Helvetica-Bold",
                14.0,
            ));
        }
        for line in 0..30 {
            spans.push(TextSpan::new(
                format!("Body line {} of chapter {} with ordinary prose.", line, page),
                page,
                "Times-Roman",
                10.0,
            ));
        }
        spans.push(TextSpan::new(format!("Page {}", page), page, "Times-Roman", 8.0));
    }

    spans
}

/// Creates a minimal PDF whose pages each carry a heading and body text.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut content = String::new();
    let mut offsets = Vec::new();

    content.push_str("%PDF-1.4\n");

    offsets.push(content.len());
    content.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i * 2 + 4)).collect();
    offsets.push(content.len());
    content.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids.join(" "),
        page_count
    ));

    offsets.push(content.len());
    content.push_str(
        "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>\nendobj\n",
    );

    for i in 0..page_count {
        let page_obj = i * 2 + 4;
        let content_obj = page_obj + 1;

        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>\nendobj\n",
            page_obj, content_obj
        ));

        let text = format!(
            "BT /F1 18 Tf 72 720 Td (Chapter {} Overview) Tj \
             /F1 10 Tf 0 -30 Td (Body text for chapter {} used in benchmarks.) Tj ET",
            i + 1,
            i + 1
        );
        offsets.push(content.len());
        content.push_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
            content_obj,
            text.len(),
            text
        ));
    }

    let xref_offset = content.len();
    content.push_str(&format!("xref\n0 {}\n", offsets.len() + 1));
    content.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        content.push_str(&format!("{:010} 00000 n \n", offset));
    }

    content.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    ));

    content.into_bytes()
}

fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("sniff_valid_pdf", |b| {
        b.iter(|| pdf_outline::sniff_bytes(black_box(&pdf_data)).is_ok());
    });

    c.bench_function("sniff_non_pdf", |b| {
        b.iter(|| pdf_outline::sniff_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Pipeline cost alone, without PDF parsing.
fn bench_pipeline(c: &mut Criterion) {
    let pipeline = OutlinePipeline::new();
    let mut group = c.benchmark_group("outline_pipeline");

    for page_count in [1u32, 10, 100] {
        let spans = create_spans(page_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_pages", page_count)),
            &spans,
            |b, spans| b.iter(|| pipeline.process(black_box(spans.clone()))),
        );
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let extractor = OutlineExtractor::new().lenient();
    let mut group = c.benchmark_group("pdf_extraction");

    for page_count in [1, 5, 10] {
        let data = create_test_pdf(page_count);
        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let _ = extractor.extract_bytes(black_box(&data));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format_detection, bench_pipeline, bench_extraction);
criterion_main!(benches);
