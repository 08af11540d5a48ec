//! Classic 3-D Perlin noise (Gustavson's lattice-permutation form).
//!
//! Kept in lock-step with `cnoise` in `post.wgsl` so the wipe mask can be
//! checked on the host.

use glam::{Vec3, Vec4};

#[inline]
fn fract4(x: Vec4) -> Vec4 {
    x - x.floor()
}

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - 0.853_734_7 * r
}

#[inline]
fn fade(t: Vec3) -> Vec3 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// GLSL `step`: 0 where `x < edge`, else 1.
#[inline]
fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    let s = |e: f32, v: f32| if v < e { 0.0 } else { 1.0 };
    Vec4::new(s(edge.x, x.x), s(edge.y, x.y), s(edge.z, x.z), s(edge.w, x.w))
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Gradients for one z-slice of the lattice cell.
fn gradients(ixy: Vec4) -> [Vec3; 4] {
    let mut gx = ixy * (1.0 / 7.0);
    let mut gy = fract4(gx.floor() * (1.0 / 7.0)) - 0.5;
    gx = fract4(gx);
    let gz = Vec4::splat(0.5) - gx.abs() - gy.abs();
    let sz = step4(gz, Vec4::ZERO);
    gx -= sz * (step4(Vec4::ZERO, gx) - 0.5);
    gy -= sz * (step4(Vec4::ZERO, gy) - 0.5);
    let g = [
        Vec3::new(gx.x, gy.x, gz.x),
        Vec3::new(gx.y, gy.y, gz.y),
        Vec3::new(gx.z, gy.z, gz.z),
        Vec3::new(gx.w, gy.w, gz.w),
    ];
    let norm = taylor_inv_sqrt(Vec4::new(
        g[0].dot(g[0]),
        g[2].dot(g[2]),
        g[1].dot(g[1]),
        g[3].dot(g[3]),
    ));
    [g[0] * norm.x, g[1] * norm.z, g[2] * norm.y, g[3] * norm.w]
}

/// Roughly in [-1, 1]; exactly 0 on integer lattice points.
pub fn cnoise(p: Vec3) -> f32 {
    let pi0 = mod289_3(p.floor());
    let pi1 = mod289_3(p.floor() + Vec3::ONE);
    let pf0 = p - p.floor();
    let pf1 = pf0 - Vec3::ONE;
    let ix = Vec4::new(pi0.x, pi1.x, pi0.x, pi1.x);
    let iy = Vec4::new(pi0.y, pi0.y, pi1.y, pi1.y);
    let iz0 = Vec4::splat(pi0.z);
    let iz1 = Vec4::splat(pi1.z);

    let ixy = permute(permute(ix) + iy);
    let [g000, g100, g010, g110] = gradients(permute(ixy + iz0));
    let [g001, g101, g011, g111] = gradients(permute(ixy + iz1));

    let n000 = g000.dot(pf0);
    let n100 = g100.dot(Vec3::new(pf1.x, pf0.y, pf0.z));
    let n010 = g010.dot(Vec3::new(pf0.x, pf1.y, pf0.z));
    let n110 = g110.dot(Vec3::new(pf1.x, pf1.y, pf0.z));
    let n001 = g001.dot(Vec3::new(pf0.x, pf0.y, pf1.z));
    let n101 = g101.dot(Vec3::new(pf1.x, pf0.y, pf1.z));
    let n011 = g011.dot(Vec3::new(pf0.x, pf1.y, pf1.z));
    let n111 = g111.dot(pf1);

    let f = fade(pf0);
    let n_z = Vec4::new(n000, n100, n010, n110).lerp(Vec4::new(n001, n101, n011, n111), f.z);
    let n_yz = (lerp(n_z.x, n_z.z, f.y), lerp(n_z.y, n_z.w, f.y));
    2.2 * lerp(n_yz.0, n_yz.1, f.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice_points() {
        for p in [Vec3::ZERO, Vec3::new(3.0, -2.0, 7.0), Vec3::new(10.0, 10.0, 1.0)] {
            assert!(cnoise(p).abs() < 1e-6, "cnoise({p}) = {}", cnoise(p));
        }
    }

    #[test]
    fn bounded_and_deterministic() {
        let mut varied = false;
        for i in 0..200 {
            let p = Vec3::new(i as f32 * 0.173, i as f32 * 0.311, i as f32 * 0.057);
            let n = cnoise(p);
            assert!(n.abs() <= 1.2, "cnoise({p}) = {n}");
            assert_eq!(n, cnoise(p));
            varied |= n.abs() > 0.05;
        }
        assert!(varied);
    }
}
