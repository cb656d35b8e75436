#![allow(dead_code)]

use rand::Rng;

/// 内存吞吐量 GiB/s
pub fn throughput_gibs(bytes: usize, duration_secs: f64) -> f64 {
    bytes as f64 / duration_secs / (1024.0 * 1024.0 * 1024.0)
}

/// 原地二元算子的读写字节数 (读 x, y + 写 x)
pub fn binary_rw_bytes<T>(n: usize) -> u64 {
    3 * n as u64 * std::mem::size_of::<T>() as u64
}

/// 原地标量算子的读写字节数 (读 x + 写 x)
pub fn unary_rw_bytes<T>(n: usize) -> u64 {
    2 * n as u64 * std::mem::size_of::<T>() as u64
}

/// 归约 (sum) 的读取字节数
pub fn reduce_bytes<T>(n: usize) -> u64 {
    n as u64 * std::mem::size_of::<T>() as u64
}

/// 生成随机 f32 向量 [-1.0, 1.0)
pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// 生成随机 f64 向量 [-1.0, 1.0)
pub fn random_f64_vec(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
