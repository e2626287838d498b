use criterion::{BenchmarkId, Criterion, Throughput};
use iothttp::http::{Client, Request, Response, parse};
use iothttp::network::error::Error;
use iothttp::network::{Close, Connect, Connection, Read, Write};
use iothttp::time::Clock;
use std::hint::black_box;

fn response_with_headers(count: usize, line_end: &str) -> String {
    let body = "{\"temperature\":23.5,\"humidity\":41}";
    let mut raw = format!("HTTP/1.1 200 OK{line_end}");
    for i in 0..count {
        raw.push_str(&format!("X-Header-{i}: value-{i}{line_end}"));
    }
    raw.push_str(&format!("Content-Length: {}{line_end}{line_end}{body}", body.len()));
    raw
}

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_parse");
    for count in [0usize, 4, 12] {
        let raw = response_with_headers(count, "\r\n");
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &raw, |b, raw| {
            b.iter(|| {
                let response: Response<'_, 16> = parse(black_box(raw.as_bytes())).unwrap();
                black_box(response.status);
            });
        });
    }
    group.finish();
}

pub fn bench_parse_lf(c: &mut Criterion) {
    let raw = response_with_headers(8, "\n");
    c.bench_function("http_parse_bare_lf", |b| {
        b.iter(|| {
            let response: Response<'_, 16> = parse(black_box(raw.as_bytes())).unwrap();
            black_box(response.body);
        });
    });
}

/// Replays a canned response and swallows the request.
struct Replay {
    reply: Vec<u8>,
    offset: usize,
    open: bool,
}

impl Connect for Replay {
    type Error = Error;
    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> {
        self.offset = 0;
        self.open = true;
        Ok(())
    }
    fn connected(&self) -> bool {
        self.open && self.offset < self.reply.len()
    }
}

impl Read for Replay {
    type Error = Error;
    fn available(&mut self) -> usize {
        if self.open { self.reply.len() - self.offset } else { 0 }
    }
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.reply.len() - self.offset);
        buf[..len].copy_from_slice(&self.reply[self.offset..self.offset + len]);
        self.offset += len;
        Ok(len)
    }
}

impl Write for Replay {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for Replay {
    type Error = Error;
    fn close(&mut self) -> Result<(), Self::Error> {
        self.open = false;
        Ok(())
    }
}

impl Connection for Replay {}

struct NoWait;

impl Clock for NoWait {
    fn now_millis(&self) -> u64 {
        0
    }
    fn delay_millis(&mut self, _ms: u32) {}
}

pub fn bench_get_exchange(c: &mut Criterion) {
    let reply = response_with_headers(6, "\r\n").into_bytes();
    let connection = Replay {
        reply,
        offset: 0,
        open: false,
    };
    let mut client = Client::new(connection, NoWait);
    let request = Request::new("bench.local", "/v1/reading");
    let mut buffer = [0u8; 1024];

    c.bench_function("http_get_exchange", |b| {
        b.iter(|| {
            let response: Response<'_, 16> = client.get(black_box(&request), &mut buffer);
            black_box(response.status);
        });
    });
}
